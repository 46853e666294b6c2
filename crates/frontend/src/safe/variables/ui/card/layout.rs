//! Size-dependent geometry of the variable card.

use crate::safe::CardSize;

pub const CARD_HEIGHT_PX: u32 = 190;
pub const CARD_PADDING_PX: u32 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Row,
    Column,
}

impl Direction {
    fn css(&self) -> &'static str {
        match self {
            Direction::Row => "row",
            Direction::Column => "column",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardLayout {
    /// Logo beside the description (`Row`) or above it (`Column`)
    pub direction: Direction,
    pub logo_px: u32,
    pub logo_basis: &'static str,
    pub logo_justify: &'static str,
    pub description_basis: &'static str,
    /// Columns taken in the variables grid
    pub grid_span: u32,
}

impl CardLayout {
    pub fn for_size(size: CardSize) -> Self {
        match size {
            CardSize::Md => Self {
                direction: Direction::Column,
                logo_px: 50,
                logo_basis: "auto",
                logo_justify: "start",
                description_basis: "auto",
                grid_span: 1,
            },
            CardSize::Lg => Self {
                direction: Direction::Row,
                logo_px: 112,
                logo_basis: "50%",
                logo_justify: "center",
                description_basis: "50%",
                grid_span: 2,
            },
        }
    }

    pub fn container_style(&self) -> String {
        format!(
            "position: relative; display: flex; height: {}px; grid-column: span {};",
            CARD_HEIGHT_PX, self.grid_span
        )
    }

    pub fn card_style(&self) -> String {
        format!(
            "flex: 1 1 100%; padding: {}px; display: flex; flex-direction: {};",
            CARD_PADDING_PX,
            self.direction.css()
        )
    }

    pub fn logo_container_style(&self) -> String {
        format!(
            "flex: 0 0; flex-basis: {}; display: flex; justify-content: {}; align-items: center;",
            self.logo_basis, self.logo_justify
        )
    }

    pub fn logo_style(&self) -> String {
        format!(
            "height: {px}px; width: {px}px; object-fit: contain;",
            px = self.logo_px
        )
    }

    pub fn description_style(&self) -> String {
        format!(
            "flex: 0 0; flex-basis: {}; display: flex; flex-direction: column; justify-content: center;",
            self.description_basis
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md_stacks_vertically() {
        let layout = CardLayout::for_size(CardSize::Md);
        assert_eq!(layout.direction, Direction::Column);
        assert_eq!(layout.logo_px, 50);
        assert_eq!(layout.grid_span, 1);
        assert!(layout.card_style().contains("flex-direction: column"));
        assert!(layout.logo_container_style().contains("justify-content: start"));
    }

    #[test]
    fn test_lg_side_by_side() {
        let layout = CardLayout::for_size(CardSize::Lg);
        assert_eq!(layout.direction, Direction::Row);
        assert_eq!(layout.logo_px, 112);
        assert_eq!(layout.logo_basis, "50%");
        assert_eq!(layout.description_basis, "50%");
        assert!(layout.container_style().contains("grid-column: span 2"));
        assert_eq!(layout.logo_style(), "height: 112px; width: 112px; object-fit: contain;");
    }

    #[test]
    fn test_container_height_fixed() {
        for size in [CardSize::Md, CardSize::Lg] {
            assert!(CardLayout::for_size(size).container_style().contains("height: 190px"));
        }
    }
}
