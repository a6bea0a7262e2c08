use clap::{Arg, ArgMatches, Command};
use fisr::{
    benchmark_speed, reference_inv_sqrt, relative_error, sweep_accuracy, try_inv_sqrt, SweepConfig,
};
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::init();

    let matches = Command::new("FISR CLI")
        .version("1.0.0")
        .about("고속 역제곱근 근사 측정 CLI 도구")
        .subcommand(
            Command::new("compute")
                .about("단일 입력에 대한 근사값 계산")
                .arg(
                    Arg::new("value")
                        .required(true)
                        .help("양의 유한 f32 입력 (예: 4.0)")
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(
            Command::new("sweep")
                .about("지수/가수 스윕으로 상대 오차 측정")
                .arg(
                    Arg::new("samples")
                        .long("samples")
                        .short('s')
                        .value_name("COUNT")
                        .help("지수당 샘플 수")
                        .default_value("256"),
                )
                .arg(
                    Arg::new("exp-min")
                        .long("exp-min")
                        .value_name("EXP")
                        .help("최소 이진 지수")
                        .default_value("-34")
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("exp-max")
                        .long("exp-max")
                        .value_name("EXP")
                        .help("최대 이진 지수")
                        .default_value("34")
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_name("SEED")
                        .help("가수 샘플링 시드")
                        .default_value("42"),
                )
                .arg(
                    Arg::new("bound")
                        .long("bound")
                        .short('b')
                        .value_name("BOUND")
                        .help("허용 최대 상대 오차")
                        .default_value("0.002"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .value_name("PATH")
                        .help("JSON 리포트 출력 경로"),
                ),
        )
        .subcommand(
            Command::new("bench")
                .about("속도 벤치마크")
                .arg(
                    Arg::new("iterations")
                        .long("iterations")
                        .short('i')
                        .value_name("COUNT")
                        .help("반복 횟수")
                        .default_value("1000000"),
                ),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("compute", sub)) => run_compute(sub),
        Some(("sweep", sub)) => run_sweep(sub),
        Some(("bench", sub)) => run_bench(sub),
        _ => {
            eprintln!("서브커맨드가 필요합니다. --help를 참고하세요.");
            process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("오류: {}", e);
        process::exit(1);
    }
}

fn run_compute(matches: &ArgMatches) -> anyhow::Result<()> {
    let raw = matches.get_one::<String>("value").expect("required");
    let x: f32 = raw.parse()?;

    // 검증 래퍼를 거치므로 정의역 밖 입력은 오류로 보고된다
    let approx = try_inv_sqrt(x)?;
    let exact = reference_inv_sqrt(x);

    println!("입력: {}", x);
    println!("근사값: {:.9}", approx);
    println!("기준값: {:.9}", exact);
    println!("상대 오차: {:.6}%", relative_error(approx, exact) * 100.0);
    Ok(())
}

fn run_sweep(matches: &ArgMatches) -> anyhow::Result<()> {
    let config = SweepConfig {
        exp_min: matches.get_one::<String>("exp-min").expect("default").parse()?,
        exp_max: matches.get_one::<String>("exp-max").expect("default").parse()?,
        samples_per_exp: matches.get_one::<String>("samples").expect("default").parse()?,
        seed: matches.get_one::<String>("seed").expect("default").parse()?,
    };
    let bound: f32 = matches.get_one::<String>("bound").expect("default").parse()?;

    log::info!("스윕 시작: {:?}", config);
    let report = sweep_accuracy(&config);

    println!("총 샘플 수: {}", report.samples);
    println!(
        "최대 상대 오차: {:.6}% (입력 {:e})",
        report.max_rel_error * 100.0,
        report.worst_input
    );
    println!("평균 상대 오차: {:.6}%", report.mean_rel_error * 100.0);

    if let Some(path) = matches.get_one::<String>("json") {
        let path = PathBuf::from(path);
        std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
        println!("JSON 리포트 저장: {}", path.display());
    }

    if !report.within_bound(bound) {
        anyhow::bail!(
            "최대 상대 오차 {:.6}가 허용 한계 {:.6}를 초과",
            report.max_rel_error,
            bound
        );
    }
    println!("허용 한계 {:.4}% 이내", bound * 100.0);
    Ok(())
}

fn run_bench(matches: &ArgMatches) -> anyhow::Result<()> {
    let iterations: usize = matches
        .get_one::<String>("iterations")
        .expect("default")
        .parse()?;
    let result = benchmark_speed(iterations);
    log::info!("벤치마크 결과: {:?}", result);
    Ok(())
}
