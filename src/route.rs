//! Route descriptors.
//!
//! A [`Route`] names one RPC operation and carries its argument, result and
//! error types at the type level, so the dispatcher is a single generic
//! function instead of one hand-written method body per route.

use std::fmt;
use std::marker::PhantomData;

/// Type-erased, immutable description of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteInfo {
    /// Stable identifier, used in logs and errors.
    pub name: &'static str,
    pub namespace: &'static str,
    /// Hierarchical path under the namespace, e.g. `members/list/continue`.
    pub path: &'static str,
    /// Whether the argument is sent as a JSON body.
    pub has_body: bool,
    /// Whether the success body is decoded. Routes returning nothing ignore it.
    pub has_result: bool,
}

impl RouteInfo {
    /// `<namespace>/<path>`, relative to the versioned base URL.
    pub fn relative_url(&self) -> String {
        format!("{}/{}", self.namespace, self.path)
    }
}

/// A typed route: `A` is the argument, `T` the success value, `E` the `409` error union.
pub struct Route<A, T, E> {
    info: RouteInfo,
    _types: PhantomData<fn(A) -> (T, E)>,
}

impl<A, T, E> Route<A, T, E> {
    const fn with_flags(
        name: &'static str,
        namespace: &'static str,
        path: &'static str,
        has_body: bool,
        has_result: bool,
    ) -> Self {
        Self {
            info: RouteInfo {
                name,
                namespace,
                path,
                has_body,
                has_result,
            },
            _types: PhantomData,
        }
    }

    /// A route that sends its argument and decodes its result.
    pub const fn new(name: &'static str, namespace: &'static str, path: &'static str) -> Self {
        Self::with_flags(name, namespace, path, true, true)
    }

    /// A route that sends no body (its argument type is `()`).
    pub const fn without_argument(
        name: &'static str,
        namespace: &'static str,
        path: &'static str,
    ) -> Self {
        Self::with_flags(name, namespace, path, false, true)
    }

    /// A route whose success body carries nothing of interest (its result type is `()`).
    pub const fn without_result(
        name: &'static str,
        namespace: &'static str,
        path: &'static str,
    ) -> Self {
        Self::with_flags(name, namespace, path, true, false)
    }

    pub const fn info(&self) -> RouteInfo {
        self.info
    }

    pub const fn name(&self) -> &'static str {
        self.info.name
    }

    pub const fn path(&self) -> &'static str {
        self.info.path
    }

    pub const fn has_body(&self) -> bool {
        self.info.has_body
    }

    pub const fn has_result(&self) -> bool {
        self.info.has_result
    }
}

impl<A, T, E> Clone for Route<A, T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, T, E> Copy for Route<A, T, E> {}

impl<A, T, E> fmt::Debug for Route<A, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Route").field(&self.info).finish()
    }
}
