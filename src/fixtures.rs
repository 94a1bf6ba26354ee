#[cfg(test)]
pub mod test {
    /// First definition source: two keys, both still typed as strings.
    pub const BASE_DEFINITIONS: &str = "\
[TIMEOUT]
description = Request timeout in seconds
define = TIMEOUT
value = 30

[RETRIES]
define = RETRIES
type = string
";

    /// Second definition source: retypes both keys and adds a third.
    pub const OVERRIDE_DEFINITIONS: &str = "\
[TIMEOUT]
type = integer

[RETRIES]
type = integer
value = 5

[VERBOSE]
define = VERBOSE
type = boolean
value = 0
";

    /// A small but complete schema covering every value type.
    pub const SERVER_DEFINITIONS: &str = "\
[PORT]
description = TCP port to listen on
define = PORT
type = integer
required = true

[NAME]
define = NAME
type = string
value = default

[FLAGS]
define = FLAGS
type = hex_integer
value = 0x1f

[WORKERS]
define = WORKERS
type = unsigned_integer
value = 4

[DEBUG]
define = DEBUG
type = boolean
value = false

[INTERNAL]
description = Tracked but never emitted
type = integer
value = 1
";

    pub const SERVER_VALUES: &str = "\
; production overrides
PORT = 8080
WORKERS = 16
";

    #[test]
    fn fixtures_are_well_formed() {
        for content in [
            BASE_DEFINITIONS,
            OVERRIDE_DEFINITIONS,
            SERVER_DEFINITIONS,
            SERVER_VALUES,
        ] {
            assert!(crate::ini::entries(content).all(|e| e.is_ok()));
        }
    }
}
