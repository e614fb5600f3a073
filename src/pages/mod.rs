mod dashboard;
mod login;
mod register;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use register::RegisterPage;
