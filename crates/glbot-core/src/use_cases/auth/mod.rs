pub(crate) mod set_token;

pub use set_token::SetToken;
