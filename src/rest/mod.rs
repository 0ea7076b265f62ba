//! The resource object model.
//!
//! This module turns API responses into local objects and local edits back
//! into requests:
//!
//! - **[`StripeObject`]**: A lazily loaded, dirty-tracking field store
//! - **[`FieldValue`]**: The value of one field, including nested objects
//! - **[`ApiResource`]**: Typed views such as [`resources::Customer`]
//! - **Capabilities**: [`Retrievable`], [`Creatable`], [`Listable`],
//!   [`Savable`], [`Deletable`]
//! - **[`ListObject`]**: A page of results that remembers its filters
//! - **Paths**: [`Endpoint`] and identifier escaping
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use stripe_api::rest::resources::{Charge, Customer};
//! use stripe_api::rest::{ApiResource, Listable, Retrievable, Savable};
//!
//! // No request yet
//! let mut customer = Customer::new(&client, "cus_123");
//!
//! // GET /v1/customers/cus_123
//! let email = customer.email().await?.map(str::to_string);
//!
//! // POST /v1/customers/cus_123 with description=VIP only
//! customer.set_description("VIP")?;
//! customer.save().await?;
//!
//! // GET /v1/charges?customer=cus_123, then again with &paid=true
//! let charges = customer.charges().await?;
//! let paid = charges.all(Some(json!({"paid": true}))).await?;
//! for charge in &paid {
//!     println!("{:?}", charge.id());
//! }
//! ```

mod list;
mod object;
mod path;
mod resource;
mod value;

pub mod resources;

pub use list::ListObject;
pub use object::{ObjectState, StripeObject};
pub use path::{escape_id, Endpoint, ResourceOperation};
pub use resource::{ApiResource, Creatable, Deletable, Listable, Retrievable, Savable};
pub use value::FieldValue;
