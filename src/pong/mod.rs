pub mod algebra_2d;
pub mod app_game_drawer;
pub mod mechanics;
pub mod rules;
pub mod throw;
