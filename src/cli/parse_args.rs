use stoat_prep::config::{Config, Technique};

/// Parse CLI arguments to a [Config] struct.
///
/// If an unrecognised argument or invalid option is found a message is sent and the process is terminated.
pub fn parse_args(args: &[String], cfg: &mut Config) {
    'arg_examination: for arg in args.iter().skip(1).rev().skip(1) {
        let mut split = arg.split("=");
        match split.next() {
            Some("--signatures") => {
                println!("c Signature-accelerated checks enabled.");
                cfg.signatures = true;
            }

            // The remaining cases follow a common template.
            // If a value is present and may be parsed appropriately, the config is updated.
            // Otherwise, a message is sent.
            Some("--technique") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<Technique>() {
                        println!("c technique set to: {value:?}");
                        cfg.technique = value;
                        continue 'arg_examination;
                    }
                }

                println!("technique requires one of: subsume, block, elim");
                std::process::exit(1);
            }

            Some("--elim_bound") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        println!("c elim_bound set to: {value}");
                        cfg.elim.bound = value;
                        continue 'arg_examination;
                    }
                }

                println!("elim_bound requires a non-negative integer");
                std::process::exit(1);
            }

            Some("--max_clause_size") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        println!("c max_clause_size set to: {value}");
                        cfg.block.max_clause_size = value;
                        cfg.elim.max_clause_size = value;
                        cfg.subsume.max_clause_size = value;
                        continue 'arg_examination;
                    }
                }

                println!("max_clause_size requires a non-negative integer");
                std::process::exit(1);
            }

            Some("--max_occurrences") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        println!("c max_occurrences set to: {value}");
                        cfg.block.max_occurrences = value;
                        cfg.elim.max_occurrences = value;
                        continue 'arg_examination;
                    }
                }

                println!("max_occurrences requires a non-negative integer");
                std::process::exit(1);
            }

            Some(unknown) => {
                println!("Unrecognised argument: {unknown}");
                std::process::exit(1);
            }

            None => {}
        }
    }
}
