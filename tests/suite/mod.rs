mod diagnostics;
mod hover;
mod session;
mod signature;
