mod common;

use around_shared::{Dialog, DialogView, Event, Model};
use common::{card, has_render, Tester};

#[test]
fn opening_a_dialog_replaces_the_previous_one() {
    let app = Tester::default();
    let mut model = Model::default();

    let update = app.update(Event::EditProfileClicked, &mut model);
    assert!(has_render(&update.effects));
    assert_eq!(model.dialog, Dialog::EditProfile);

    app.update(Event::AddPlaceClicked, &mut model);
    assert_eq!(model.dialog, Dialog::AddPlace);

    let photo = card("1", "u2", &[]);
    app.update(Event::CardClicked(Box::new(photo.clone())), &mut model);
    assert_eq!(model.dialog, Dialog::ViewImage(Box::new(photo)));
}

#[test]
fn close_dialogs_always_renders_closed() {
    let app = Tester::default();
    let mut model = Model::default();

    // Closing with nothing open is harmless.
    let update = app.update(Event::CloseDialogs, &mut model);
    assert!(has_render(&update.effects));
    assert_eq!(model.dialog, Dialog::Closed);

    app.update(Event::CardDeleteClicked(Box::new(card("1", "u1", &[]))), &mut model);
    assert!(model.dialog.is_open());

    app.update(Event::CloseDialogs, &mut model);
    assert_eq!(model.dialog, Dialog::Closed);
    assert_eq!(app.view(&model).dialog, DialogView::Closed);
}

#[test]
fn image_preview_shows_clicked_card() {
    let app = Tester::default();
    let mut model = Model::default();

    app.update(Event::CardClicked(Box::new(card("7", "u2", &[]))), &mut model);
    assert_eq!(
        app.view(&model).dialog,
        DialogView::ViewImage {
            name: "Place 7".into(),
            link: "https://example.com/7.jpg".into(),
        }
    );
}

#[test]
fn dialogs_never_touch_data() {
    let app = Tester::default();
    let mut model = Model::default();

    for event in [
        Event::EditProfileClicked,
        Event::EditAvatarClicked,
        Event::AddPlaceClicked,
        Event::CloseDialogs,
    ] {
        app.update(event, &mut model);
        assert!(model.user.profile().is_none());
        assert!(model.cards.is_empty());
    }
}
