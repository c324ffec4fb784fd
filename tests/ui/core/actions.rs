use gradebook::controller::Section;
use gradebook::ui::core::actions::{Action, DialogType};

#[test]
fn test_action_equality() {
    assert_eq!(Action::ShowSection(Section::Grades), Action::ShowSection(Section::Grades));
    assert_ne!(Action::ShowSection(Section::Grades), Action::ShowSection(Section::Students));
    assert_ne!(Action::ResolveConfirmation(true), Action::ResolveConfirmation(false));
    assert_eq!(
        Action::UnenrollStudent {
            enrollment_id: 7,
            student_id: 1
        },
        Action::UnenrollStudent {
            enrollment_id: 7,
            student_id: 1
        }
    );
}

#[test]
fn test_dialog_type_is_copy() {
    let dialog = DialogType::Logs;
    let action = Action::ShowDialog(dialog);
    assert_eq!(action, Action::ShowDialog(DialogType::Logs));
    assert_eq!(dialog, DialogType::Logs);
}
