#[cfg(test)]
pub mod test {
    use std::net::{IpAddr, Ipv4Addr};
    use std::time::Duration;

    use crate::binding::{Binding, Options};
    use crate::hooks::Hook;
    use crate::value::{Arguments, arguments_from_json};

    /// Options for the classic naval fate usage:
    ///
    /// ```text
    /// naval_fate ship new <name>...
    /// naval_fate ship <name> move <x> <y> [--speed=<kn>]
    /// naval_fate ship shoot <x> <y>
    /// naval_fate mine (set|remove) <x> <y> [--moored|--drifting]
    /// naval_fate -h | --help
    /// naval_fate --version
    /// ```
    #[derive(Debug, Default, PartialEq)]
    pub struct NavalFate {
        pub help: bool,
        pub ship: bool,
        pub new: bool,
        pub name: Vec<String>,
        pub mv: bool,
        pub x: i64,
        pub y: i64,
        pub speed: i32,
        pub shoot: bool,
        pub mine: bool,
        pub set: bool,
        pub remove: bool,
        pub moored: bool,
        pub drifting: bool,
        pub version: bool,
    }

    impl Options for NavalFate {
        fn bindings(&mut self) -> Vec<Binding<'_>> {
            vec![
                Binding::field("--help", &mut self.help),
                Binding::field("ship", &mut self.ship),
                Binding::field("new", &mut self.new),
                Binding::field("<name>", &mut self.name),
                Binding::field("move", &mut self.mv),
                Binding::field("<x>", &mut self.x),
                Binding::field("<y>", &mut self.y),
                Binding::field("--speed", &mut self.speed),
                Binding::field("shoot", &mut self.shoot),
                Binding::field("mine", &mut self.mine),
                Binding::field("set", &mut self.set),
                Binding::field("remove", &mut self.remove),
                Binding::field("--moored", &mut self.moored),
                Binding::field("--drifting", &mut self.drifting),
                Binding::field("--version", &mut self.version),
            ]
        }
    }

    /// Every naval fate key at its "not given" value, overlaid with `given`.
    pub fn naval_fate_args(given: serde_json::Value) -> Arguments {
        let mut arguments = args(serde_json::json!({
            "--help": false, "ship": false, "new": false, "<name>": [],
            "move": false, "<x>": null, "<y>": null, "--speed": null,
            "shoot": false, "mine": false, "set": false, "remove": false,
            "--moored": false, "--drifting": false, "--version": false,
        }));
        arguments.extend(args(given));
        arguments
    }

    pub fn args(json: serde_json::Value) -> Arguments {
        arguments_from_json(json).unwrap()
    }

    // -- Nested fixture: Nested { A { B { C { x }, y }, z }, p } ---------------

    #[derive(Debug, Default, PartialEq)]
    pub struct C {
        pub x: bool,
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct B {
        pub c: C,
        pub y: i32,
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct A {
        pub b: B,
        pub z: String,
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct Nested {
        pub a: A,
        pub p: f32,
    }

    impl Options for C {
        fn bindings(&mut self) -> Vec<Binding<'_>> {
            vec![Binding::field("x", &mut self.x)]
        }
    }

    impl Options for B {
        fn bindings(&mut self) -> Vec<Binding<'_>> {
            vec![
                Binding::nested(&mut self.c),
                Binding::field("<y>", &mut self.y),
            ]
        }
    }

    impl Options for A {
        fn bindings(&mut self) -> Vec<Binding<'_>> {
            vec![
                Binding::nested(&mut self.b),
                Binding::field("<z>", &mut self.z),
            ]
        }
    }

    impl Options for Nested {
        fn bindings(&mut self) -> Vec<Binding<'_>> {
            vec![
                Binding::nested(&mut self.a),
                Binding::field("<p>", &mut self.p),
            ]
        }
    }

    // -- Duration / float fixture ----------------------------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct Timing {
        pub duration: Duration,
        pub float: f32,
        pub timeout: Option<Duration>,
    }

    impl Options for Timing {
        fn bindings(&mut self) -> Vec<Binding<'_>> {
            vec![
                Binding::field("<duration>", &mut self.duration),
                Binding::field("<float>", &mut self.float),
                Binding::field("--timeout", &mut self.timeout),
            ]
        }
    }

    // -- Hooked custom type ----------------------------------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct Negative(pub i64);

    impl Negative {
        /// Parses an integer and stores its negation.
        pub fn hook() -> Hook {
            Hook::new(|field: &mut Negative, raw: &str| {
                field.0 = -raw.parse::<i64>()?;
                Ok::<_, std::num::ParseIntError>(())
            })
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct NegativeOpts {
        pub value: Negative,
    }

    impl Options for NegativeOpts {
        fn bindings(&mut self) -> Vec<Binding<'_>> {
            vec![Binding::custom("<int>", &mut self.value)]
        }
    }

    // -- FromStr-parsed field -------------------------------------------------

    #[derive(Debug, PartialEq)]
    pub struct Harbor {
        pub addr: IpAddr,
    }

    impl Default for Harbor {
        fn default() -> Self {
            Self {
                addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            }
        }
    }

    impl Options for Harbor {
        fn bindings(&mut self) -> Vec<Binding<'_>> {
            vec![Binding::parse("--addr", &mut self.addr)]
        }
    }

    // -- Small fixture for binding-table tests ---------------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct Coordinates {
        pub x: i64,
        pub y: i64,
    }

    impl Options for Coordinates {
        fn bindings(&mut self) -> Vec<Binding<'_>> {
            vec![
                Binding::field("<x>", &mut self.x),
                Binding::field("<y>", &mut self.y),
            ]
        }
    }

    #[test]
    fn naval_fate_args_cover_every_binding() {
        let mut opts = NavalFate::default();
        let arguments = naval_fate_args(serde_json::json!({}));
        for binding in opts.bindings() {
            assert!(arguments.contains_key(binding.key().unwrap()));
        }
        assert_eq!(arguments.len(), 15);
    }
}
