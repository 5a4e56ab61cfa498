mod common;

use around_shared::{
    AvatarUpdate, Dialog, DialogView, Event, GatewayError, GatewayOperation, GatewayOutput,
    ProfileUpdate, UserId, UserProfile,
};
use common::{ada, card, gateway_requests, has_render, loaded_model, settle, Tester};

fn grace() -> UserProfile {
    UserProfile {
        name: "Grace".into(),
        about: "Admiral".into(),
        ..ada()
    }
}

#[test]
fn profile_edit_round_trip() {
    let app = Tester::default();
    let mut model = loaded_model(&app, vec![card("1", "u2", &[])]);

    // 1. Dialog opens prefilled with the current profile
    let update = app.update(Event::EditProfileClicked, &mut model);
    assert!(has_render(&update.effects));
    assert_eq!(
        app.view(&model).dialog,
        DialogView::EditProfile {
            name: "Ada".into(),
            about: "Engineer".into(),
        }
    );

    // 2. Submission waits for the server
    let submitted = ProfileUpdate {
        name: "Grace".into(),
        about: "Admiral".into(),
    };
    let update = app.update(Event::ProfileSubmitted(submitted.clone()), &mut model);
    let mut requests = gateway_requests(update.effects);
    assert_eq!(requests[0].operation, GatewayOperation::EditUser(submitted));
    assert_eq!(model.user.profile().map(|p| p.name.as_str()), Some("Ada"));

    // 3. Confirmed profile replaces the stored one and dialogs close
    let effects = settle(&app, &mut requests[0], Ok(GatewayOutput::User(grace())), &mut model);
    assert!(has_render(&effects));
    assert_eq!(model.user.profile(), Some(&grace()));
    assert_eq!(model.dialog, Dialog::Closed);
}

#[test]
fn failed_profile_edit_keeps_dialog_and_profile() {
    let app = Tester::default();
    let mut model = loaded_model(&app, vec![]);
    app.update(Event::EditProfileClicked, &mut model);
    let before = model.clone();

    let update = app.update(
        Event::ProfileSubmitted(ProfileUpdate {
            name: "Grace".into(),
            about: "Admiral".into(),
        }),
        &mut model,
    );
    let mut requests = gateway_requests(update.effects);
    let effects = settle(
        &app,
        &mut requests[0],
        Err(GatewayError::Status {
            status: 500,
            message: "server error".into(),
        }),
        &mut model,
    );

    assert!(!has_render(&effects));
    assert_eq!(model, before);
    assert_eq!(model.dialog, Dialog::EditProfile);
}

#[test]
fn too_short_profile_fields_are_rejected_locally() {
    let app = Tester::default();
    let mut model = loaded_model(&app, vec![]);

    let update = app.update(
        Event::ProfileSubmitted(ProfileUpdate {
            name: "A".into(),
            about: "Engineer".into(),
        }),
        &mut model,
    );
    assert!(update.effects.is_empty());
}

#[test]
fn avatar_edit_replaces_whole_profile() {
    let app = Tester::default();
    let mut model = loaded_model(&app, vec![]);
    app.update(Event::EditAvatarClicked, &mut model);
    assert_eq!(model.dialog, Dialog::EditAvatar);

    let update = app.update(
        Event::AvatarSubmitted(AvatarUpdate {
            avatar: "https://example.com/new.png".into(),
        }),
        &mut model,
    );
    let mut requests = gateway_requests(update.effects);
    assert!(matches!(requests[0].operation, GatewayOperation::EditAvatar(_)));

    let updated = UserProfile {
        avatar: "https://example.com/new.png".into(),
        ..ada()
    };
    settle(&app, &mut requests[0], Ok(GatewayOutput::User(updated.clone())), &mut model);

    assert_eq!(model.user.profile(), Some(&updated));
    assert_eq!(model.user.id(), Some(&UserId::new("u1")));
    assert_eq!(model.dialog, Dialog::Closed);
}

#[test]
fn avatar_must_be_a_web_link() {
    let app = Tester::default();
    let mut model = loaded_model(&app, vec![]);

    let update = app.update(
        Event::AvatarSubmitted(AvatarUpdate {
            avatar: "file:///etc/passwd".into(),
        }),
        &mut model,
    );
    assert!(gateway_requests(update.effects).is_empty());
}
