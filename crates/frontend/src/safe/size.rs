/// Visual size variant shared by cards and table logos.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardSize {
    #[default]
    Md,
    Lg,
}
