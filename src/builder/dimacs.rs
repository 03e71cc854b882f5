use std::io::BufRead;

use crate::{
    builder::ClauseOk,
    context::Context,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// A summary of a parse, returned on success.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The atom count declared by the preamble.
    pub expected_atoms: usize,

    /// The clause count declared by the preamble.
    pub expected_clauses: usize,

    /// Non-unit clauses stored.
    pub added_clauses: usize,

    /// Clauses diverted to the unit list.
    pub unit_clauses: usize,

    /// Clauses dropped as tautologies.
    pub tautologies: usize,
}

impl Context {
    /// Reads a DIMACS representation of a formula into the context.
    ///
    /// A `p cnf <atoms> <clauses>` preamble is required, and the clauses found must match the count declared --- fewer or more are both an error, as either way the formula seen would differ from the formula described.
    /// On any error no part of the read should be used, and no technique should be run.
    ///
    /// ```rust
    /// # use stoat_prep::config::Config;
    /// # use stoat_prep::context::Context;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// p cnf 4 3
    ///  1  2 0
    /// -1  2 -3 0
    ///  3 -4 0
    /// ");
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(info.added_clauses, 3);
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut info = ParserInfo::default();
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;

        // First phase, read until a preamble is found.
        let mut preamble_found = false;
        'preamble_loop: loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'preamble_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.chars().find(|c| !c.is_whitespace()) {
                None | Some('c') => {
                    buffer.clear();
                    continue 'preamble_loop;
                }

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace();
                    if problem_details.next() != Some("p") || problem_details.next() != Some("cnf")
                    {
                        return Err(ErrorKind::from(err::ParseError::ProblemSpecification));
                    }

                    info.expected_atoms = match problem_details.next().map(str::parse) {
                        Some(Ok(count)) => count,
                        _ => return Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
                    };

                    info.expected_clauses = match problem_details.next().map(str::parse) {
                        Some(Ok(count)) => count,
                        _ => return Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
                    };

                    buffer.clear();
                    preamble_found = true;
                    break 'preamble_loop;
                }

                Some(_) => return Err(ErrorKind::from(err::ParseError::MissingPreamble)),
            }
        }

        if !preamble_found {
            return Err(ErrorKind::from(err::ParseError::MissingPreamble));
        }

        self.clause_db.ensure_atom_ceiling(info.expected_atoms as Atom);

        // Second phase, read clauses until the formula ends.
        let mut clause_buffer: CClause = Vec::default();
        let mut clause_counter = 0;

        'formula_loop: loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') => {}

                _ => {
                    for item in buffer.split_whitespace() {
                        match item {
                            "0" => {
                                clause_counter += 1;
                                let the_clause = std::mem::take(&mut clause_buffer);

                                if the_clause.is_empty() {
                                    log::warn!(target: targets::PARSE, "Empty clause on line {line_counter}");
                                    continue;
                                }

                                let units = self.clause_db.unit_clauses().len();
                                match self.add_clause(the_clause)? {
                                    ClauseOk::Tautology => info.tautologies += 1,
                                    ClauseOk::Added => {
                                        if self.clause_db.unit_clauses().len() > units {
                                            info.unit_clauses += 1;
                                        } else {
                                            info.added_clauses += 1;
                                        }
                                    }
                                }
                            }

                            _ => {
                                let parsed_int = match item.parse::<isize>() {
                                    Ok(int) => int,
                                    Err(_) => {
                                        return Err(ErrorKind::from(err::ParseError::Line(
                                            line_counter,
                                        )))
                                    }
                                };

                                let atom = parsed_int.unsigned_abs();
                                if atom == 0 || atom > info.expected_atoms {
                                    return Err(ErrorKind::from(err::ParseError::AtomOutOfRange(
                                        parsed_int,
                                    )));
                                }

                                let the_literal =
                                    CLiteral::new(atom as Atom, parsed_int.is_positive());
                                clause_buffer.push(the_literal);
                            }
                        }
                    }
                }
            }

            buffer.clear();
        }

        if clause_counter != info.expected_clauses {
            log::warn!(target: targets::PARSE,
                "Found {clause_counter} clauses, expected {}", info.expected_clauses);
            return Err(ErrorKind::from(err::ParseError::ClauseCount {
                expected: info.expected_clauses,
                found: clause_counter,
            }));
        }

        log::info!(target: targets::PARSE,
            "Read {} clauses over {} atoms", clause_counter, info.expected_atoms);
        Ok(info)
    }
}
