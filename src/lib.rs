//! The Rubik's cube on the cubie level, as a group.
//!
//! ```
//! use cubiegroup::prelude::*;
//!
//! // A corner 3-cycle on the top layer
//! let cube = build_from_sequence("R2B2RFR'B2RF'R").unwrap();
//! BOTTOM_BLOCK.check(&cube).unwrap();
//!
//! let action = project_top_layer(&cube).unwrap();
//! assert_eq!(action.to_string(), "UFR->UBR, UBR->UBL, UBL->UFR, UFL->UFL");
//!
//! // The inverse sequence undoes it
//! let inverse = build_from_sequence(&invert_sequence("R2B2RFR'B2RF'R").unwrap()).unwrap();
//! assert!((cube * inverse).is_solved());
//! ```

pub mod analysis;
pub mod cube;
pub mod projection;

pub mod prelude {
	pub use crate::analysis::*;
	pub use crate::cube::{block::*, cubiecube::*, turn::*, *};
	pub use crate::projection::*;
}
