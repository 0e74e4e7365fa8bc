//! Items used by code generated from `#[derive(Reflect)]`. Not public API.
#![doc(hidden)]

#[cfg(feature = "auto_register")]
pub mod auto_register {
    use crate::info::Typed;
    use crate::registry::TypeRegistry;

    pub use inventory;

    /// A registration function collected by `inventory`.
    pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

    inventory::collect!(__AutoRegisterFunc);

    pub trait __RegisterType {
        fn __register(registry: &mut TypeRegistry);
    }

    impl<T: Typed> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut TypeRegistry) {
            registry.register::<T>();
        }
    }

    fn __mark_available(registry: &mut TypeRegistry) {
        registry.mark_auto_registered();
    }

    // Only reached on platforms where `inventory` collects anything.
    inventory::submit! {
        __AutoRegisterFunc(__mark_available)
    }

    pub fn __register_types(registry: &mut TypeRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }
}
