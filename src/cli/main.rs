use stoat_prep::{config::Config, context::Context};

mod parse_args;
mod read;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        println!("c A path to a CNF formula is required.");
        std::process::exit(1);
    }

    let mut config = Config::default();
    parse_args::parse_args(&args, &mut config);

    let mut ctx = Context::from_config(config);

    // Safe unwrap, by the length check above.
    let info = match read::read_dimacs(args.last().unwrap(), &mut ctx) {
        Ok(info) => info,

        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    println!("c Atoms:               {}", info.expected_atoms);
    println!("c Clauses:             {}", info.added_clauses);
    println!("c Unit clauses:        {}", info.unit_clauses);
    println!("c Tautologies:         {}", info.tautologies);

    ctx.simplify();

    println!("c Technique:           {:?}", ctx.config.technique);
    println!("c Signatures:          {}", ctx.config.signatures);
    println!("c Blocked clauses:     {}", ctx.counters.blocked_clauses);
    println!("c Eliminable atoms:    {}", ctx.counters.eliminated_atoms);
    println!("c Resolvent checks:    {}", ctx.counters.elim_resolvents);
    println!("c Subsumed:            {}", ctx.counters.subsumed_clauses);
    println!("c Strengthened:        {}", ctx.counters.strengthened_clauses);
    if ctx.config.signatures {
        let hits = ctx.counters.block_signature_hits
            + ctx.counters.elim_signature_hits
            + ctx.counters.subsume_signature_hits;
        println!("c Signature hits:      {hits}");
    }
    println!("c Time:                {:?}", ctx.counters.time);
}
