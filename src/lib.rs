pub mod error;

pub mod rational;

pub mod range;

pub mod exec_env;

pub mod dispatcher;

pub mod prelude {
    pub use crate::dispatcher::{DispatchResult, Dispatcher};
    pub use crate::error::{ParseErrorKind, RationalError};
    pub use crate::exec_env::{ExecEnv, ExecError};
    pub use crate::range::{ClosedRange, RationalRange};
    pub use crate::rational::Rational;
}
