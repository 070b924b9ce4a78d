//! Page Components

mod cancel;
mod checkout;
mod home;
mod success;

pub use cancel::CancelPage;
pub use checkout::CheckoutPage;
pub use home::HomePage;
pub use success::SuccessPage;
