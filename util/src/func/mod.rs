//! Describing callables by their arity, argument types and result type, plus composing them.
//! Code heavily inspired by the [naan](https://github.com/cakekindel/naan/tree/main) crate.
//!
//! A callable of one argument is an [`f1::F1Once`] (or the stronger [`f1::F1Mut`]/[`f1::F1`]);
//! the trait parameter is the argument type and [`f1::F1Once::Output`] is the result type. Every
//! closure, function item and function pointer gets these for free, so bounding on them is how a
//! combinator states "a unary function from `A` to `B`" at compile time.

#![allow(clippy::inline_always)]

pub mod compose;

pub use compose::{Compose, compose};

pub mod f1 {
    use crate::func::compose::Compose;

    pub trait F1<A>: F1Mut<A> {
        fn call1(&self, a: A) -> Self::Output;
    }

    pub trait F1Mut<A>: F1Once<A> {
        fn call1_mut(&mut self, a: A) -> Self::Output;
    }

    pub trait F1Once<A> {
        /// The result type
        type Output;

        fn call1_once(self, a: A) -> Self::Output;
    }

    pub trait F1OnceExt<A>: F1Once<A> {
        /// Calls `self` first, then feeds its output into `g`.
        fn chain<G, C>(self, g: G) -> Compose<Self, G, Self::Output>
        where
            Self: Sized,
            G: F1Once<Self::Output, Output = C>;
    }

    mod impls {
        use crate::func::compose::Compose;
        use crate::func::f1::{F1, F1Mut, F1Once, F1OnceExt};

        impl<F, A, B> F1<A> for F
        where
            F: Fn(A) -> B,
        {
            #[inline(always)]
            fn call1(&self, a: A) -> Self::Output {
                self(a)
            }
        }

        impl<F, A, B> F1Mut<A> for F
        where
            F: FnMut(A) -> B,
        {
            #[inline(always)]
            fn call1_mut(&mut self, a: A) -> Self::Output {
                self(a)
            }
        }

        impl<F, A, B> F1Once<A> for F
        where
            F: FnOnce(A) -> B,
        {
            type Output = B;

            #[inline(always)]
            fn call1_once(self, a: A) -> Self::Output {
                self(a)
            }
        }

        impl<F, A> F1OnceExt<A> for F
        where
            F: F1Once<A>,
        {
            #[inline(always)]
            fn chain<G, C>(self, g: G) -> Compose<Self, G, Self::Output>
            where
                Self: Sized,
                G: F1Once<Self::Output, Output = C>,
            {
                Compose::compose(self, g)
            }
        }
    }
}

pub mod f2 {
    pub trait F2<A, B>: F2Mut<A, B> {
        fn call2(&self, a: A, b: B) -> Self::Output;
    }

    pub trait F2Mut<A, B>: F2Once<A, B> {
        fn call2_mut(&mut self, a: A, b: B) -> Self::Output;
    }

    pub trait F2Once<A, B> {
        type Output;

        fn call2_once(self, a: A, b: B) -> Self::Output;
    }

    mod impls {
        use crate::func::f2::{F2, F2Mut, F2Once};

        impl<F, A, B, C> F2<A, B> for F
        where
            F: Fn(A, B) -> C,
        {
            #[inline(always)]
            fn call2(&self, a: A, b: B) -> Self::Output {
                self(a, b)
            }
        }

        impl<F, A, B, C> F2Mut<A, B> for F
        where
            F: FnMut(A, B) -> C,
        {
            #[inline(always)]
            fn call2_mut(&mut self, a: A, b: B) -> Self::Output {
                self(a, b)
            }
        }

        impl<F, A, B, C> F2Once<A, B> for F
        where
            F: FnOnce(A, B) -> C,
        {
            type Output = C;

            #[inline(always)]
            fn call2_once(self, a: A, b: B) -> Self::Output {
                self(a, b)
            }
        }
    }
}
