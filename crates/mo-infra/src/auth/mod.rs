mod stub_auth;

pub use stub_auth::StubAuthService;
