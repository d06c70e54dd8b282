//! Accessor registry
//!
//! Resolves named members of an object into typed sources and properties.
//!
//! Each member is registered with a getter, and optionally a setter and a way
//! to subscribe to its changes. Members are stored type-erased, and checked
//! against the requested type when resolved.

// Imports
use {
	crate::Error,
	core::{
		any::{self, Any},
		fmt,
		marker::PhantomData,
	},
	itertools::Itertools,
	reprop_property::{BoxProperty, FnProperty},
	reprop_source::{BoxSource, Observer, Subscription, create},
	std::{collections::HashMap, rc::Rc},
};

/// Member getter
type Getter<O, T> = Rc<dyn Fn(&O) -> T>;

/// Member setter
type Setter<O, T> = Rc<dyn Fn(&O, T)>;

/// Member change subscription
type Changed<O> = Rc<dyn Fn(&O, Observer) -> Subscription>;

/// Accessor for a member of type `T` of an object `O`
pub struct Accessor<O, T> {
	/// Getter
	get: Getter<O, T>,

	/// Setter
	set: Option<Setter<O, T>>,

	/// Change subscription
	changed: Option<Changed<O>>,
}

impl<O, T> Accessor<O, T> {
	/// Creates a read-only accessor, with no change notification
	pub fn new<G>(get: G) -> Self
	where
		G: Fn(&O) -> T + 'static,
	{
		Self {
			get:     Rc::new(get),
			set:     None,
			changed: None,
		}
	}

	/// Adds a setter
	#[must_use]
	pub fn with_setter<S>(mut self, set: S) -> Self
	where
		S: Fn(&O, T) + 'static,
	{
		self.set = Some(Rc::new(set));
		self
	}

	/// Adds change notification.
	///
	/// `changed` must subscribe the observer to changes of the member on the given object.
	#[must_use]
	pub fn with_changed<C>(mut self, changed: C) -> Self
	where
		C: Fn(&O, Observer) -> Subscription + 'static,
	{
		self.changed = Some(Rc::new(changed));
		self
	}
}

impl<O, T> Clone for Accessor<O, T> {
	fn clone(&self) -> Self {
		Self {
			get:     Rc::clone(&self.get),
			set:     self.set.clone(),
			changed: self.changed.clone(),
		}
	}
}

impl<O, T> fmt::Debug for Accessor<O, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Accessor")
			.field("set", &self.set.is_some())
			.field("changed", &self.changed.is_some())
			.finish_non_exhaustive()
	}
}

/// Registered member
#[derive(derive_more::Debug)]
struct Member {
	/// Accessor, type-erased
	#[debug(skip)]
	accessor: Rc<dyn Any>,

	/// Name of the member's type
	type_name: &'static str,
}

/// Accessor registry
pub struct AccessorRegistry<O> {
	/// Members, by name
	members: HashMap<String, Member>,

	/// Object type
	object: PhantomData<fn(&O)>,
}

impl<O: 'static> AccessorRegistry<O> {
	/// Creates a new, empty, registry
	#[must_use]
	pub fn new() -> Self {
		Self {
			members: HashMap::new(),
			object:  PhantomData,
		}
	}

	/// Registers a member.
	///
	/// Registering a name twice replaces the previous member.
	pub fn register<T: 'static>(&mut self, name: impl Into<String>, accessor: Accessor<O, T>) -> &mut Self {
		let name = name.into();
		let member = Member {
			accessor:  Rc::new(accessor),
			type_name: any::type_name::<T>(),
		};

		if let Some(previous) = self.members.insert(name.clone(), member) {
			tracing::warn!(?name, ?previous, "Member was registered twice, replacing previous registration");
		}

		self
	}

	/// Returns the names of all registered members, sorted
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.members.keys().map(String::as_str).sorted_unstable()
	}

	/// Returns the accessor of a member
	pub fn accessor<T: 'static>(&self, name: &str) -> Result<Accessor<O, T>, Error> {
		let member = self.members.get(name).ok_or_else(|| Error::UnknownMember {
			name:  name.to_owned(),
			known: self.names().join(", "),
		})?;

		let accessor = Rc::clone(&member.accessor)
			.downcast::<Accessor<O, T>>()
			.map_err(|_| Error::TypeMismatch {
				name:     name.to_owned(),
				expected: any::type_name::<T>(),
			})?;

		Ok(Accessor::clone(&accessor))
	}

	/// Returns the type name of a member
	#[must_use]
	pub fn type_name(&self, name: &str) -> Option<&'static str> {
		self.members.get(name).map(|member| member.type_name)
	}

	/// Resolves a member of `object` as a source
	pub fn source<T: 'static>(&self, object: O, name: &str) -> Result<BoxSource<T>, Error>
	where
		O: Clone,
	{
		let accessor = self.accessor::<T>(name)?;
		let changed = accessor.changed.ok_or_else(|| Error::UnsupportedAccessor { name: name.to_owned() })?;

		let get = accessor.get;
		let source = create(
			{
				let object = object.clone();
				move |observer| changed(&object, observer)
			},
			move || get(&object),
		);

		Ok(BoxSource::new(source))
	}

	/// Resolves a member of `object` as a property
	pub fn property<T: 'static>(&self, object: O, name: &str) -> Result<BoxProperty<T>, Error>
	where
		O: Clone,
	{
		let set = self
			.accessor::<T>(name)?
			.set
			.ok_or_else(|| Error::ReadOnlyMember { name: name.to_owned() })?;
		let source = self.source::<T>(object.clone(), name)?;

		let setter: Rc<dyn Fn(T)> = Rc::new(move |value: T| set(&object, value));
		Ok(BoxProperty::new(FnProperty::from_rc(source, setter)))
	}
}

impl<O: 'static> Default for AccessorRegistry<O> {
	fn default() -> Self {
		Self::new()
	}
}

impl<O> fmt::Debug for AccessorRegistry<O> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map()
			.entries(self.members.iter().sorted_unstable_by_key(|&(name, _)| name))
			.finish()
	}
}
