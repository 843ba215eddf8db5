/// Router Module Index
///
/// Splits the site's routes by who may reach them. The access gate in front of
/// the whole router enforces the split; these modules only group the routes.

/// Pages and content API open to every visitor.
pub mod public;

/// The traveller profile and the admin dashboard, guarded by the access gate.
pub mod protected;
