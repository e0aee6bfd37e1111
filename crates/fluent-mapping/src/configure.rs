/// Runs a configurator callback against a descriptor and hands the
/// descriptor back for chaining.
///
/// ```
/// use fluent_mapping::{Builder, ClassKind, Configure};
///
/// let mut builder = Builder::new("Product", ClassKind::Entity);
/// builder.decimal("price").configure(|price| {
///     price.precision(10).scale(4);
/// });
/// ```
pub trait Configure: Sized {
    fn configure(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        f(self);
        self
    }
}
