/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A typemap used to store configuration for an operation.
//!
//! This is a heavily modified version of `http::Extensions`: values must be `Send + Sync`
//! so that operations can be moved across threads and shared between retry attempts.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::hash::{BuildHasherDefault, Hasher};
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard};

type AnyMap = HashMap<TypeId, NamedType, BuildHasherDefault<IdHasher>>;

struct NamedType {
    name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

impl NamedType {
    fn as_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.value.downcast_mut()
    }

    fn into_value<T: 'static>(self) -> Option<T> {
        self.value.downcast().map(|t| *t).ok()
    }
}

// With TypeIds as keys, there's no need to hash them. They are already hashes
// themselves, coming from the compiler. The IdHasher just holds the u64 of
// the TypeId, and then returns it, instead of doing any bit fiddling.
#[derive(Default)]
struct IdHasher(u64);

impl Hasher for IdHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, _: &[u8]) {
        unreachable!("TypeId calls write_u64");
    }

    #[inline]
    fn write_u64(&mut self, id: u64) {
        self.0 = id;
    }
}

/// A type-map of configuration data.
///
/// `PropertyBag` can be used by `Request` and `Response` to store
/// data used to configure the SDK request pipeline.
#[derive(Default)]
pub struct PropertyBag {
    // In http::Extensions, this is wrapped in an Option to avoid an allocation for an empty
    // map. Every operation carries at least an endpoint resolver, so that optimization is
    // not worth it here.
    map: AnyMap,
}

impl PropertyBag {
    /// Create an empty `PropertyBag`.
    pub fn new() -> PropertyBag {
        PropertyBag {
            map: AnyMap::default(),
        }
    }

    /// Insert a type into this `PropertyBag`.
    ///
    /// If a value of this type already existed, it will be returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use smithy_http::property_bag::PropertyBag;
    /// let mut props = PropertyBag::new();
    ///
    /// #[derive(Debug, Eq, PartialEq)]
    /// struct Region(&'static str);
    /// assert!(props.insert(Region("us-east-1")).is_none());
    /// assert_eq!(props.insert(Region("us-west-2")), Some(Region("us-east-1")));
    /// ```
    pub fn insert<T: Send + Sync + 'static>(&mut self, val: T) -> Option<T> {
        self.map
            .insert(
                TypeId::of::<T>(),
                NamedType {
                    name: std::any::type_name::<T>(),
                    value: Box::new(val),
                },
            )
            .and_then(|val| val.into_value())
    }

    /// Get a reference to a type previously inserted on this `PropertyBag`.
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|val| val.value.downcast_ref())
    }

    /// Get a mutable reference to a type previously inserted on this `PropertyBag`.
    pub fn get_mut<T: Send + Sync + 'static>(&mut self) -> Option<&mut T> {
        self.map
            .get_mut(&TypeId::of::<T>())
            .and_then(|val| val.as_mut())
    }

    /// Remove a type from this `PropertyBag`.
    ///
    /// If a value of this type existed, it will be returned.
    pub fn remove<T: Send + Sync + 'static>(&mut self) -> Option<T> {
        self.map
            .remove(&TypeId::of::<T>())
            .and_then(|val| val.into_value())
    }

    /// Clear the `PropertyBag` of all inserted properties.
    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl Debug for PropertyBag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.map.values().map(|ty| ty.name).collect();
        names.sort_unstable();
        f.debug_struct("PropertyBag")
            .field("contents", &names)
            .finish()
    }
}

/// A property bag shared between an operation and all of its clones.
///
/// Retries clone the request but keep pointing at the same bag, so that middleware which
/// already ran can leave state behind for later attempts.
#[derive(Clone, Debug, Default)]
pub struct SharedPropertyBag(Arc<Mutex<PropertyBag>>);

impl SharedPropertyBag {
    pub fn new() -> Self {
        SharedPropertyBag(Arc::new(Mutex::new(PropertyBag::new())))
    }

    /// Acquire an immutable reference to the property bag.
    pub fn acquire(&self) -> impl Deref<Target = PropertyBag> + '_ {
        self.lock()
    }

    /// Acquire a mutable reference to the property bag.
    pub fn acquire_mut(&self) -> impl DerefMut<Target = PropertyBag> + '_ {
        self.lock()
    }

    fn lock(&self) -> MutexGuard<'_, PropertyBag> {
        // a panic while holding the lock cannot leave the map half-updated
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl From<PropertyBag> for SharedPropertyBag {
    fn from(bag: PropertyBag) -> Self {
        SharedPropertyBag(Arc::new(Mutex::new(bag)))
    }
}

#[test]
fn test_extensions() {
    #[derive(Debug, PartialEq)]
    struct MyType(i32);

    let mut extensions = PropertyBag::new();

    extensions.insert(5i32);
    extensions.insert(MyType(10));

    assert_eq!(extensions.get(), Some(&5i32));
    assert_eq!(extensions.get_mut(), Some(&mut 5i32));

    assert_eq!(extensions.remove::<i32>(), Some(5i32));
    assert!(extensions.get::<i32>().is_none());

    assert_eq!(extensions.get::<bool>(), None);
    assert_eq!(extensions.get(), Some(&MyType(10)));
    assert!(format!("{:?}", extensions).contains("MyType"));
}

#[test]
fn shared_bag_is_shared_between_clones() {
    let bag = SharedPropertyBag::new();
    let clone = bag.clone();
    bag.acquire_mut().insert("hello");
    assert_eq!(clone.acquire().get::<&'static str>(), Some(&"hello"));
}
