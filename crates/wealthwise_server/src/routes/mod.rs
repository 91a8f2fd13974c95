pub mod goals;
pub mod portfolio;

pub use goals::goal_routes;
pub use portfolio::portfolio_routes;
