//! Text rendering of the visible board window.

use enum_map::{EnumMap, enum_map};

use crate::{
    board::Board,
    error::BoardError,
    grid::Coordinate,
    status_queue::StatusQueue,
    tile_component::{Biome, Feature},
};

/// Renders the board window around the current position as rows of glyphs,
/// with a status column alongside.
///
/// The glyph tables are total maps over the biome and feature enums, so a
/// tile can never fail to render.
pub struct Interface {
    status_spacing_amount: usize,
    player_glyph: &'static str,
    biome_glyphs: EnumMap<Biome, &'static str>,
    feature_glyphs: EnumMap<Feature, &'static str>,
}

impl Interface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes the spacing between the board and the status column.
    pub fn set_status_spacing_amount(&mut self, spacing_amount: usize) {
        self.status_spacing_amount = spacing_amount;
    }

    /// Render the view window centered on `position`.
    ///
    /// The player glyph covers its tile, features cover their biome, and
    /// every row drains at most one line from the status queue. Fails with
    /// [`BoardError::MissingTile`] if the window is not fully generated.
    pub fn render(
        &self,
        board: &Board,
        position: Coordinate,
        status_rows: &StatusQueue,
    ) -> Result<String, BoardError> {
        let half = (board.view_size() / 2) as i32;
        let mut out = String::new();
        for i in (position.x() - half)..=(position.x() + half) {
            for j in (position.y() - half)..=(position.y() + half) {
                let here = Coordinate::new(i, j);
                let tile = board.get_tile(here)?;
                let glyph = if here == position {
                    self.player_glyph
                } else if let Some(feature) = tile.feature() {
                    self.feature_glyphs[feature]
                } else {
                    self.biome_glyphs[tile.biome()]
                };
                out.push_str(glyph);
                out.push_str("  ");
            }
            for _ in 0..self.status_spacing_amount {
                out.push(' ');
            }
            out.push_str(&status_rows.try_dequeue().unwrap_or_default());
            out.push('\n');
        }
        Ok(out)
    }
}

impl Default for Interface {
    fn default() -> Self {
        Self {
            status_spacing_amount: 20,
            player_glyph: "\u{263A}",
            biome_glyphs: enum_map! {
                Biome::Plains => "\u{169A}",
                Biome::Forest => "\u{2E19}",
                Biome::Ocean => "\u{23D6}",
                Biome::Desert => ".",
                Biome::Mountains => "\u{1A0F}",
            },
            feature_glyphs: enum_map! {
                Feature::City => "\u{25A3}",
                Feature::CityMarket => "\u{2696}",
                Feature::CityHarbour => "\u{2693}",
                Feature::CityPlaza => "\u{2698}",
                Feature::CityArena => "\u{2694}",
                Feature::CityPrison => "\u{2162}",
                Feature::CityNeighbourhood => "\u{2302}",
                Feature::Village => "\u{2C26}",
                Feature::Camp => "\u{15D7}",
                Feature::LoneHouse => "\u{2302}",
                Feature::Cave => "\u{26CF}",
                Feature::Lake => "o",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Interface;
    use crate::{board::Board, grid::Coordinate, status_queue::StatusQueue};

    #[test]
    fn render_emits_one_row_per_view_line() {
        let board = Board::from_seed(48);
        let interface = Interface::new();
        let status_rows = StatusQueue::default();
        let rendered = interface
            .render(&board, Coordinate::ORIGIN, &status_rows)
            .unwrap();
        assert_eq!(
            rendered.lines().count(),
            board.view_size() as usize
        );
    }

    #[test]
    fn render_places_the_player_exactly_once() {
        let board = Board::from_seed(48);
        let interface = Interface::new();
        let status_rows = StatusQueue::default();
        let rendered = interface
            .render(&board, Coordinate::new(2, -1), &status_rows)
            .unwrap();
        assert_eq!(rendered.matches('\u{263A}').count(), 1);
    }

    #[test]
    fn render_drains_status_lines_row_by_row() {
        let board = Board::from_seed(48);
        let mut interface = Interface::new();
        interface.set_status_spacing_amount(1);
        let status_rows = StatusQueue::default();
        status_rows.enqueue("Character Name");
        status_rows.enqueue("HP: 25");
        let rendered = interface
            .render(&board, Coordinate::ORIGIN, &status_rows)
            .unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].ends_with("Character Name"));
        assert!(lines[1].ends_with("HP: 25"));
        assert!(status_rows.try_dequeue().is_none());
    }

    #[test]
    fn render_fails_outside_the_generated_region() {
        let board = Board::from_seed(48);
        let interface = Interface::new();
        let status_rows = StatusQueue::default();
        assert!(
            interface
                .render(&board, Coordinate::new(100, 100), &status_rows)
                .is_err()
        );
    }
}
