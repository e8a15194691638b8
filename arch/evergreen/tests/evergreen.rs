use evgasm_core::ArchDecoder;
use evgasm_evergreen::{ClauseDecoder, ClauseKind, Options};
use evgasm_test::test::{self, Runner, Test};

struct Evergreen {
    kind: ClauseKind,
    flags: &'static str,
}

impl Runner for Evergreen {
    fn create(&mut self, test: &Test) -> Box<dyn ArchDecoder> {
        let mut opts = Options::default();
        let mut counter = false;

        let flags = test::parse_flags(self.flags).chain(test::parse_flags(test.comment));
        for (name, state) in flags {
            match name {
                "count" => counter = state,
                "debug" => opts.debug = state,
                _ => panic!("unexpected flag {name}"),
            }
        }

        let decoder = ClauseDecoder::new(self.kind)
            .with_options(opts)
            .with_counter(counter);
        Box::new(decoder)
    }

    fn bundle_end(&self) -> &'static str {
        match self.kind {
            ClauseKind::Alu => "--",
            _ => "",
        }
    }
}

macro_rules! test {
    ($name:ident, $kind:ident, $file:expr, $flags:expr) => {
        #[test]
        fn $name() -> Result<(), String> {
            let kind = ClauseKind::$kind;
            Evergreen { kind, flags: $flags }.run($file, include_str!($file))
        }
    };
}

test!(cf, Cf, "cf.test", "");
test!(alu, Alu, "alu.test", "");
test!(tc, Tc, "tc.test", "");
