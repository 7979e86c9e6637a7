use simplysp::error::Error;
use simplysp::value::Value;


pub fn setup() {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}
}

pub fn result<S: AsRef<str>>(s: S) -> Value {
    setup();
    simplysp::evaluate(s).unwrap()
}

pub fn printed<S: AsRef<str>>(s: S) -> String {
    result(s).to_string()
}

pub fn parse_error<S: AsRef<str>>(s: S) -> Error {
    setup();
    simplysp::evaluate(s).unwrap_err()
}
