mod app;
mod effects;
mod logging;
mod persistence;
mod surface;

pub(crate) use app::run_app;
