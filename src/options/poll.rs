use std::time::Duration;

use clap::Parser;

#[derive(Debug, Parser)]
pub struct PollOpt {
    /// Re-issue the query on this interval until interrupted, ex. `--poll 30s`
    #[arg(long, value_parser = humantime::parse_duration)]
    pub poll: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;
    use rstest::rstest;
    use speculoos::prelude::*;

    use super::PollOpt;

    #[rstest]
    #[case::seconds("30s", Duration::from_secs(30))]
    #[case::compound("1m 5s", Duration::from_secs(65))]
    #[case::millis("250ms", Duration::from_millis(250))]
    fn it_parses_human_durations(#[case] raw: &str, #[case] expected: Duration) {
        let opt = PollOpt::try_parse_from(["keep-up", "--poll", raw]).unwrap();
        assert_that!(opt.poll).is_equal_to(Some(expected));
    }

    #[test]
    fn it_rejects_bare_numbers() {
        assert_that!(PollOpt::try_parse_from(["keep-up", "--poll", "30"])).is_err();
    }
}
