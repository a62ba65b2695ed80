use std::{future::Future, marker::PhantomData};

use dioxus::{
    hooks::{use_context, use_context_provider, use_resource, Resource},
    signals::{ReadableExt, Signal},
};

/// Like `use_resource`, but also puts a refresh signal into the context so a
/// descendant can force the fetch to re-run after a mutation (our stand-in
/// for query-cache invalidation).
///
/// ```rust,ignore
/// // In the parent:
/// let instances = use_refreshable_resource(move || async move { /* fetch */ });
///
/// // In any child, with the same `T` as the resource's output:
/// let mut refresh = use_refresh_resource::<T>();
/// refresh.write();
/// ```
pub fn use_refreshable_resource<T, F>(mut future: impl FnMut() -> F + 'static) -> Resource<T>
where
    T: 'static,
    F: Future<Output = T> + 'static,
{
    let context =
        use_context_provider::<(Signal<()>, PhantomData<T>)>(|| (Signal::new(()), PhantomData));
    use_resource(move || {
        context.0.read();
        future()
    })
}

/// See [`use_refreshable_resource`].
pub fn use_refresh_resource<T>() -> Signal<()>
where
    T: 'static + Clone,
{
    let context = use_context::<(Signal<()>, PhantomData<T>)>();
    context.0
}
