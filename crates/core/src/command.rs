//! Command abstraction.

/// A command expresses the intent to change one entity.
///
/// Commands are **transient**: they are built per request, handed to a command
/// bus and discarded. They carry no persisted identity of their own, so two
/// commands with the same field values are equal.
///
/// Commands must be:
/// - **Cloneable**: the same command may be logged, retried or previewed
/// - **Send + Sync**: buses may hand them to other threads
/// - **'static**: commands own all of their data
pub trait Command: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Reference to the entity the command targets.
    type Target: Copy + core::fmt::Debug;

    /// Stable command name (e.g. "products.product.update").
    fn command_type(&self) -> &'static str;

    fn target(&self) -> Self::Target;
}
