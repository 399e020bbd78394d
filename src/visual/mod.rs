pub mod controls;
pub mod hud;
pub mod palette;
pub mod picking;
pub mod plugin;
pub mod scene;
