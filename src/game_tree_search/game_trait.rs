use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// A single-player puzzle that a search driver can expand toward a goal.
pub trait Game: Debug + Clone + Send + Sync {
    type Action: Copy + Clone + Send + Sync + Debug + PartialEq + Eq;
    type Actions: IntoIterator<Item = Self::Action>;
    type Error: Debug + Send;
    /// Order-independent identity used to suppress duplicate states.
    type Key: Eq + Hash + Clone + Send + Display;
    type Eval: Debug + Default + Clone + Copy + PartialEq + Eq + PartialOrd + Ord + Send + Sync + Display + Into<i64>;

    /// Refuses to start a search from anything other than a root state.
    fn check_root(&self) -> Result<(), Self::Error>;

    fn is_complete(&self) -> bool;

    /// Number of actions applied since the root.
    fn depth(&self) -> u32;

    fn canonical_key(&self) -> Self::Key;

    fn eval(&self) -> Self::Eval;

    /// Actions to expand this state with, `None` for a pruned or dead branch.
    fn expansion(&self) -> Result<Option<Self::Actions>, Self::Error>;

    /// State reached by applying `action`, with its evaluation ready.
    fn child(&self, action: Self::Action) -> Result<Self, Self::Error>;

    /// Actions from the root to this state, oldest first.
    fn actions_from_root(&self) -> Vec<Self::Action>;
}
