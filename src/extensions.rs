//! Extension points for custom pipeline operations.
//!
//! [`CompositeTransform`] packages a sequence of operator calls into a
//! reusable, named component, so a common transformation pattern can be
//! applied with one call instead of being restated at every use site.

use crate::pipeline::{Element, Pipeline};

/// A reusable, packaged sequence of transformations.
///
/// Implement this trait to bundle several operator calls into a single
/// component, then apply it with
/// [`apply_composite`](Pipeline::apply_composite). The expansion runs at
/// build time and is as lazy as the operators it is made of.
///
/// # Example
/// ```
/// use lazyflow::*;
///
/// struct NormalizeWords;
///
/// impl CompositeTransform<String, String> for NormalizeWords {
///     fn expand(&self, input: Pipeline<String>) -> Pipeline<String> {
///         input
///             .map(|w| w.trim().to_lowercase())
///             .filter(|w| !w.is_empty())
///             .distinct()
///     }
/// }
///
/// # fn main() -> anyhow::Result<()> {
/// let words = from_vec(vec![
///     "  Apple ".to_string(),
///     "apple".to_string(),
///     "".to_string(),
///     "Pear".to_string(),
/// ]);
///
/// let out = words.apply_composite(&NormalizeWords).to_vec()?;
/// assert_eq!(out, vec!["apple".to_string(), "pear".to_string()]);
/// # Ok(())
/// # }
/// ```
pub trait CompositeTransform<I: Element, O: Element> {
    /// Expand this component into its underlying operator chain.
    fn expand(&self, input: Pipeline<I>) -> Pipeline<O>;
}

impl<T: Element> Pipeline<T> {
    /// Apply a packaged [`CompositeTransform`] to this pipeline.
    #[must_use]
    pub fn apply_composite<O, C>(&self, transform: &C) -> Pipeline<O>
    where
        O: Element,
        C: CompositeTransform<T, O>,
    {
        transform.expand(self.clone())
    }
}
