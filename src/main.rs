use raster_explorer::{AlgorithmKind, CliController, ParseAlgorithmKindError, PpmFilePresenter};

/// Algorithm ids from the command line, or every algorithm when none are given.
fn parse_kinds(
    args: impl Iterator<Item = String>,
) -> Result<Vec<AlgorithmKind>, ParseAlgorithmKindError> {
    let kinds = args.map(|arg| arg.parse()).collect::<Result<Vec<_>, _>>()?;

    if kinds.is_empty() {
        Ok(AlgorithmKind::ALL.to_vec())
    } else {
        Ok(kinds)
    }
}

fn run(args: impl Iterator<Item = String>) -> Result<(), Box<dyn std::error::Error>> {
    let kinds = parse_kinds(args)?;
    let controller = CliController::new(PpmFilePresenter::new());

    controller.render_all(&kinds)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(std::env::args().skip(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_selects_every_algorithm() {
        let kinds = parse_kinds(std::iter::empty()).unwrap();

        assert_eq!(kinds, AlgorithmKind::ALL.to_vec());
    }

    #[test]
    fn test_arguments_are_parsed_in_order() {
        let args = ["wu", "bresenham-line"].map(String::from).into_iter();

        assert_eq!(
            parse_kinds(args).unwrap(),
            vec![AlgorithmKind::Wu, AlgorithmKind::BresenhamLine]
        );
    }

    #[test]
    fn test_unknown_argument_is_an_error() {
        let args = ["spline"].map(String::from).into_iter();

        assert!(parse_kinds(args).is_err());
    }

    #[test]
    fn test_run_returns_ok() {
        let result = run(std::iter::empty());

        assert!(result.is_ok());
    }
}
