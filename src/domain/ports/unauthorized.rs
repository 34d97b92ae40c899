/// Policy invoked by the request dispatcher whenever any endpoint answers
/// 401. Clears the stored credential and announces the forced sign-out
/// automatically, so no call site can leave the UI authenticated-but-rejected.
pub trait UnauthorizedHandler: Send + Sync {
    fn on_unauthorized(&self);
}
