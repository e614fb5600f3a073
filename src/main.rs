//! SynapseGuard budget frontend.
//!
//! Client-side rendered Yew application compiled to WebAssembly. Users
//! register, log in, create named budgets with spending limits and record
//! expenses against them; persistence lives in two backend HTTP services
//! (auth on :8000, budgets on :8001).

mod api;
mod app;
mod components;
mod metrics;
mod models;
mod pages;
mod session;

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<app::App>::new().render();
}
