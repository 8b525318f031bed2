mod sentry;

pub use self::sentry::SentryFairing;
