pub mod bootstrap;
pub mod cli;
pub mod locale;
pub mod menu;
pub mod ops;
pub mod registry;
pub mod resources;
pub mod translator;
