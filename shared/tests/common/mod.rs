#![allow(dead_code)]

use std::collections::BTreeSet;

use around_shared::{
    App, Card, CardId, Effect, GatewayOperation, GatewayOutput, GatewayResult, Model, UserId,
    UserProfile,
};
use crux_core::{testing::AppTester, Request};

pub type Tester = AppTester<App, Effect>;

pub fn ada() -> UserProfile {
    UserProfile {
        id: UserId::new("u1"),
        name: "Ada".into(),
        about: "Engineer".into(),
        avatar: "https://example.com/ada.png".into(),
    }
}

pub fn card(id: &str, owner: &str, likes: &[&str]) -> Card {
    Card {
        id: CardId::new(id),
        name: format!("Place {id}"),
        link: format!("https://example.com/{id}.jpg"),
        owner: UserId::new(owner),
        likes: likes.iter().map(|l| UserId::new(*l)).collect::<BTreeSet<_>>(),
    }
}

pub fn gateway_requests(effects: Vec<Effect>) -> Vec<Request<GatewayOperation>> {
    effects
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::Gateway(request) => Some(request),
            _ => None,
        })
        .collect()
}

pub fn has_render(effects: &[Effect]) -> bool {
    effects.iter().any(|e| matches!(e, Effect::Render(_)))
}

/// Resolves a gateway request and feeds the resulting events back into the
/// app, returning every effect those events produced.
pub fn settle(
    app: &Tester,
    request: &mut Request<GatewayOperation>,
    output: GatewayResult,
    model: &mut Model,
) -> Vec<Effect> {
    let update = app.resolve(request, output).expect("gateway request should resolve");
    let mut effects = update.effects;
    for event in update.events {
        effects.extend(app.update(event, model).effects);
    }
    effects
}

/// A model with Ada signed in and the given cards loaded, built through
/// the same startup exchange a shell would drive.
pub fn loaded_model(app: &Tester, cards: Vec<Card>) -> Model {
    let mut model = Model::default();
    let update = app.update(around_shared::Event::Started, &mut model);
    let requests = gateway_requests(update.effects);
    assert_eq!(requests.len(), 2);

    let mut cards = Some(cards);
    for mut request in requests {
        let output = match request.operation {
            GatewayOperation::GetUser => GatewayOutput::User(ada()),
            GatewayOperation::GetCards => GatewayOutput::Cards(cards.take().unwrap_or_default()),
            ref other => panic!("unexpected startup operation {other:?}"),
        };
        settle(app, &mut request, Ok(output), &mut model);
    }
    model
}
