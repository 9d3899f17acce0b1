/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A type map used to carry configuration alongside a request.
//!
//! Middleware reads its inputs (region, credentials, signing configuration...) from the bag
//! and may insert values for middleware further down the stack.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Debug, Formatter};

type AnyMap = HashMap<TypeId, Box<dyn Any + Send + Sync>>;

#[derive(Default)]
pub struct PropertyBag {
    map: AnyMap,
}

impl PropertyBag {
    pub fn new() -> PropertyBag {
        PropertyBag {
            map: HashMap::default(),
        }
    }

    /// Insert a value. If a value of this type already existed, it is returned.
    pub fn insert<T: Send + Sync + 'static>(&mut self, val: T) -> Option<T> {
        self.map
            .insert(TypeId::of::<T>(), Box::new(val))
            .and_then(|boxed| boxed.downcast().ok().map(|boxed| *boxed))
    }

    pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref())
    }

    pub fn get_mut<T: Send + Sync + 'static>(&mut self) -> Option<&mut T> {
        self.map
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut())
    }

    pub fn remove<T: Send + Sync + 'static>(&mut self) -> Option<T> {
        self.map
            .remove(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast().ok().map(|boxed| *boxed))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Debug for PropertyBag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyBag")
            .field("len", &self.map.len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use crate::property_bag::PropertyBag;

    #[test]
    fn values_are_keyed_by_type() {
        #[derive(Debug, PartialEq)]
        struct Region(&'static str);
        #[derive(Debug, PartialEq)]
        struct Service(&'static str);

        let mut bag = PropertyBag::new();
        assert!(bag.is_empty());
        assert_eq!(bag.insert(Region("us-east-1")), None);
        bag.insert(Service("dynamodb"));
        assert_eq!(bag.insert(Region("us-west-2")), Some(Region("us-east-1")));
        assert_eq!(bag.get::<Region>(), Some(&Region("us-west-2")));

        bag.get_mut::<Service>().expect("present").0 = "health";
        assert_eq!(bag.remove::<Service>(), Some(Service("health")));
        assert_eq!(bag.get::<Service>(), None);
        assert_eq!(bag.len(), 1);
    }
}
