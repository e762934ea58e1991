//! Interactive route comparison on the command line.

use std::io::{BufRead, Write};

use itertools::Itertools;

use crate::{
    error::SearchError,
    graphs::{path::SearchRequest, road_map::RoadMap, Weight},
    search::{config::AnnealingOptions, search_request, SearchOutcome, Strategy},
};

pub fn validate_pair(
    map: &RoadMap,
    origin: &str,
    destination: &str,
) -> Result<SearchRequest, SearchError> {
    let request = SearchRequest::from_names(map, origin, destination)?;
    if request.source == request.target {
        return Err(SearchError::SameOriginAndDestination(origin.to_string()));
    }
    Ok(request)
}

/// Runs `strategies` on a validated request.
pub fn compare(
    map: &RoadMap,
    request: &SearchRequest,
    strategies: &[Strategy],
    options: &AnnealingOptions,
) -> Result<Vec<SearchOutcome>, SearchError> {
    strategies
        .iter()
        .map(|&strategy| search_request(map, strategy, request, options))
        .collect()
}

pub fn write_outcomes<W: Write>(
    map: &RoadMap,
    outcomes: &[SearchOutcome],
    output: &mut W,
) -> std::io::Result<()> {
    for outcome in outcomes {
        writeln!(output, "{}", outcome.strategy)?;
        if outcome.path.is_reachable() {
            writeln!(output, "{}", outcome.path.display(map))?;
        } else {
            writeln!(output, "No path found")?;
        }
        if outcome.path.weight == Weight::MAX {
            writeln!(output, "Total Cost: inf")?;
        } else {
            writeln!(output, "Total Cost: {}", outcome.path.weight)?;
        }
    }
    Ok(())
}

fn read_answer<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts for origin and destination until both are valid and distinct,
/// prints every strategy's route and repeats while the user answers yes.
/// End of input ends the session.
pub fn run_session<R: BufRead, W: Write>(
    map: &RoadMap,
    strategies: &[Strategy],
    options: &AnnealingOptions,
    input: &mut R,
    output: &mut W,
) -> Result<(), SearchError> {
    writeln!(
        output,
        "Here are all the possible Romania cities that can be traveled:"
    )?;
    writeln!(output, "[{}]", map.sorted_names().iter().join(", "))?;

    loop {
        write!(output, "Please enter the origin city: ")?;
        output.flush()?;
        let Some(mut origin) = read_answer(input)? else {
            return Ok(());
        };
        while !map.contains(&origin) {
            write!(output, "Could not find {}, please try again: ", origin)?;
            output.flush()?;
            let Some(answer) = read_answer(input)? else {
                return Ok(());
            };
            origin = answer;
        }

        write!(output, "Please enter the destination city: ")?;
        output.flush()?;
        let request = loop {
            let Some(destination) = read_answer(input)? else {
                return Ok(());
            };
            match validate_pair(map, &origin, &destination) {
                Ok(request) => break request,
                Err(SearchError::SameOriginAndDestination(_)) => write!(
                    output,
                    "The same city can't be both origin and destination. Please try again. \
                     Please enter the destination city: "
                )?,
                Err(_) => write!(output, "Could not find {}, please try again: ", destination)?,
            }
            output.flush()?;
        };

        let outcomes = compare(map, &request, strategies, options)?;
        write_outcomes(map, &outcomes, output)?;

        write!(
            output,
            "Would you like to find the best path between the other two cities? "
        )?;
        output.flush()?;
        let again = read_answer(input)?.unwrap_or_default().to_lowercase();
        if again != "yes" && again != "y" {
            writeln!(output, "Thank You for Using Our App")?;
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::romania::load_graph;

    #[test]
    fn pair_validation() {
        let map = load_graph();

        assert!(validate_pair(&map, "Arad", "Bucharest").is_ok());
        assert!(matches!(
            validate_pair(&map, "Arad", "Arad"),
            Err(SearchError::SameOriginAndDestination(city)) if city == "Arad"
        ));
        assert!(matches!(
            validate_pair(&map, "Arad", "Boston"),
            Err(SearchError::UnknownNode(_))
        ));
    }
}
