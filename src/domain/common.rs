/// Supplies a presentation-ready label for CLI output or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}
