//! Behavior module: the declarative token language that switches field kinds on and off.
//!
//! Evaluation is a small interpreter:
//! - **Tokenize**: each source becomes a [`BehaviorSequence`]
//! - **Fold**: sources are concatenated in precedence order and the last
//!   mention of a name wins ([`EffectiveState`])
//! - **Match**: each [`CapabilityRule`] tests its accepted [`BehaviorPattern`]s
//!   in order against the folded state

pub mod capability;
#[doc(inline)]
pub use capability::{evaluate, CapabilityRule, CapabilityTable, CONNECTION, LIST};

pub mod lookup;
#[doc(inline)]
pub use lookup::{BehaviorLookup, BehaviorSource, ExtensionBehaviorLookup, SourceOrigin};

pub mod pattern;
#[doc(inline)]
pub use pattern::BehaviorPattern;

pub mod token;
#[doc(inline)]
pub use token::{BehaviorSequence, BehaviorToken, EffectiveState};
