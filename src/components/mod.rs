pub mod game_card;
pub mod games_menu;

pub use game_card::GameCard;
pub use games_menu::{GamesMenu, GamesMenuProps};
