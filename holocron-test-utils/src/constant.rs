/// Signing secret used for access tokens issued during tests
pub static TEST_JWT_SECRET: &str = "holocron-test-secret";

/// Stand-in password hash for user fixtures that never log in
pub static TEST_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2hoYXNo";
