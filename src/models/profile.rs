/// The logged-in employee, as reported by the profile endpoint.
#[derive(Debug, Clone)]
pub struct Profile {
    pub username: String,
    pub full_name: String,
    /// Label of the shift active today, e.g. "Morning 08-16".
    pub active_shift: String,
    /// Whether this user's shift permits breaks. Consumed by the dispatcher
    /// before it lets a break-start movement reach the network.
    pub allows_break: bool,
}
