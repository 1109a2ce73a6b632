use clap::{self, value_parser, Arg, Command};

fn add_output(app: Command<'static>) -> Command<'static> {
    app.arg(
        Arg::new("width")
            .long("width")
            .short('w')
            .help("Use this many characters as terminal width")
            .takes_value(true)
            .default_value("110")
            .value_parser(value_parser!(u64).range(20..)),
    )
    .arg(
        Arg::new("height")
            .long("height")
            .short('H')
            .help("Use that many `rows` for every panel")
            .takes_value(true)
            .default_value("20")
            .value_parser(value_parser!(u64).range(10..)),
    )
}

fn add_data(app: Command<'static>) -> Command<'static> {
    app.arg(
        Arg::new("resolution")
            .long("resolution")
            .short('r')
            .help("Number of points of the scatter panels")
            .takes_value(true)
            .default_value("50")
            .value_parser(value_parser!(u64).range(2..)),
    )
    .arg(
        Arg::new("start")
            .long("start")
            .help("Smallest x value")
            .takes_value(true)
            .default_value("0")
            .allow_hyphen_values(true)
            .value_parser(value_parser!(f64)),
    )
    .arg(
        Arg::new("end")
            .long("end")
            .help("Biggest x value")
            .takes_value(true)
            .default_value("1")
            .allow_hyphen_values(true)
            .value_parser(value_parser!(f64)),
    )
    .arg(
        Arg::new("multiplier")
            .long("multiplier")
            .short('m')
            .help("Histogram samples per scatter point")
            .takes_value(true)
            .default_value("1000")
            .value_parser(value_parser!(u64).range(1..)),
    )
    .arg(
        Arg::new("bins")
            .long("bins")
            .short('b')
            .help("Use this amount of buckets for every histogram")
            .takes_value(true)
            .default_value("75")
            .value_parser(value_parser!(u64).range(1..)),
    )
    .arg(
        Arg::new("seed")
            .long("seed")
            .short('s')
            .help("Seed the random generator, for reproducible figures")
            .takes_value(true)
            .value_parser(value_parser!(u64)),
    )
}

fn add_style(app: Command<'static>) -> Command<'static> {
    const LONG_RC_HELP: &str = "\
Override a style setting, as in 'grid.linestyle=--'.

Can be used several times.  Overrides are applied after the settings of the rc
file, if any.  Known keys are grid.color, grid.linestyle, grid.linewidth,
axes.linewidth, axes.grid, xtick.direction, ytick.direction,
xtick.minor.visible, ytick.minor.visible, errorbar.capsize and
mathtext.default.
";
    app.arg(
        Arg::new("rc")
            .long("rc")
            .help("Override a style setting (KEY=VALUE)")
            .long_help(LONG_RC_HELP)
            .takes_value(true)
            .multiple_occurrences(true)
            .value_parser(value_parser!(String)),
    )
    .arg(
        Arg::new("rc-file")
            .long("rc-file")
            .help("Read style settings from this file ('-' for standard input)")
            .takes_value(true)
            .long_help(
                "Read style settings from a file with `key: value` lines, where `#` \
                 starts a comment.  A single dash reads them from standard input.",
            )
            .value_parser(value_parser!(String)),
    )
}

pub fn get_app() -> Command<'static> {
    let app = Command::new("stylecharts")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .max_term_width(100)
        .arg(
            Arg::new("color")
                .short('c')
                .long("color")
                .help("Use colors in the output")
                .takes_value(true)
                .value_parser(["auto", "no", "yes"])
                .default_value("auto"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Be more verbose")
                .takes_value(false),
        );
    add_style(add_data(add_output(app)))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn default_arg_parsing() {
        let m = get_app().get_matches_from(vec!["stylecharts"]);
        assert!(!m.is_present("verbose"));
        assert_eq!("auto", m.get_one::<String>("color").unwrap());
        assert_eq!(110, *m.get_one::<u64>("width").unwrap());
        assert_eq!(20, *m.get_one::<u64>("height").unwrap());
        assert_eq!(50, *m.get_one::<u64>("resolution").unwrap());
        assert_eq!(1000, *m.get_one::<u64>("multiplier").unwrap());
        assert_eq!(75, *m.get_one::<u64>("bins").unwrap());
        assert_eq!(0.0, *m.get_one::<f64>("start").unwrap());
        assert_eq!(1.0, *m.get_one::<f64>("end").unwrap());
        assert!(m.get_one::<u64>("seed").is_none());
        assert!(m.get_many::<String>("rc").is_none());
        assert!(m.get_one::<String>("rc-file").is_none());
    }

    #[test]
    fn full_arg_parsing() {
        let arg_vec = vec![
            "stylecharts",
            "--verbose",
            "-c",
            "no",
            "--width",
            "80",
            "-H",
            "12",
            "--start",
            "-1.5",
            "--seed",
            "7",
            "--rc",
            "grid.linestyle=--",
            "--rc",
            "axes.linewidth=1",
            "--rc-file",
            "-",
        ];
        let m = get_app().get_matches_from(arg_vec);
        assert!(m.is_present("verbose"));
        assert_eq!("no", m.get_one::<String>("color").unwrap());
        assert_eq!(80, *m.get_one::<u64>("width").unwrap());
        assert_eq!(12, *m.get_one::<u64>("height").unwrap());
        assert_eq!(-1.5, *m.get_one::<f64>("start").unwrap());
        assert_eq!(7, *m.get_one::<u64>("seed").unwrap());
        assert_eq!(
            vec!["grid.linestyle=--", "axes.linewidth=1"],
            m.get_many::<String>("rc")
                .unwrap()
                .map(|s| s.as_str())
                .collect::<Vec<&str>>()
        );
        assert_eq!("-", m.get_one::<String>("rc-file").unwrap());
    }

    #[test]
    fn short_options_take_values() {
        let m = get_app().get_matches_from(vec![
            "stylecharts",
            "-s",
            "1",
            "-r",
            "10",
            "--rc-file",
            "/tmp/stylerc",
            "--end",
            "inf",
        ]);
        assert_eq!(1, *m.get_one::<u64>("seed").unwrap());
        assert_eq!(10, *m.get_one::<u64>("resolution").unwrap());
        assert_eq!("/tmp/stylerc", m.get_one::<String>("rc-file").unwrap());
        assert!(m.get_one::<f64>("end").unwrap().is_infinite());
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(get_app()
            .try_get_matches_from(vec!["stylecharts", "--resolution", "1"])
            .is_err());
        assert!(get_app()
            .try_get_matches_from(vec!["stylecharts", "--bins", "0"])
            .is_err());
        assert!(get_app()
            .try_get_matches_from(vec!["stylecharts", "--color", "sometimes"])
            .is_err());
        assert!(get_app()
            .try_get_matches_from(vec!["stylecharts", "--width", "abc"])
            .is_err());
    }
}
