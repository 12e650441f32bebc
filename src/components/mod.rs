//! The render surface: pure components consuming `&AppState`.

pub mod banner;
pub mod city_list;
pub mod help_bar;
pub mod weather_panel;

pub use crate::component::Component;

pub use banner::{BannerTheme, MessageBanner, MessageBannerProps};
pub use city_list::{CityList, CityListProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use weather_panel::{SPINNERS, WeatherPanel, WeatherPanelProps};
