use super::*;

#[test]
fn map_button_standard_buttons() {
    assert_eq!(map_button(0), Some(Button::Primary));
    assert_eq!(map_button(1), Some(Button::Middle));
    assert_eq!(map_button(2), Some(Button::Secondary));
}

#[test]
fn map_button_ignores_back_and_forward() {
    assert_eq!(map_button(3), None);
    assert_eq!(map_button(4), None);
    assert_eq!(map_button(-1), None);
}
