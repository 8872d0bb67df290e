use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use workstation_toolbox::app::{self, AppError};
use workstation_toolbox::catalog::{Catalog, DeviceId, DurationId, LocationId};
use workstation_toolbox::config::{self, Config};
use workstation_toolbox::diy::{self, DiyInput};
use workstation_toolbox::finance::{self, BreakEvenInput, RoiInput};
use workstation_toolbox::i18n::{self, keys, Translator};
use workstation_toolbox::recommend::{self, UseCaseInput};
use workstation_toolbox::{logging, report};

/// 휴대용 워크스테이션 계산기 CLI. 하위 명령이 없으면 대화형 메뉴를 띄운다.
#[derive(Debug, Parser)]
#[command(name = "workstation_toolbox_cli", version, about)]
struct Cli {
    /// 언어 코드 (auto/ko/en)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    lang: String,
    /// 결과를 JSON으로 출력
    #[arg(long, global = true)]
    json: bool,
    /// 디버그 로그 출력
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 손익분기 계산
    BreakEven(BreakEvenArgs),
    /// 제품 구매 ROI 계산
    Roi(RoiArgs),
    /// DIY 조립 비용과 제품가 비교
    Diy(DiyArgs),
    /// 사용 환경에 맞는 제품 추천
    Recommend(RecommendArgs),
    /// 제품/기기/장소 정보 출력
    Catalog,
}

#[derive(Debug, Args)]
struct BreakEvenArgs {
    #[arg(long)]
    price: f64,
    #[arg(long)]
    variable_cost: f64,
    #[arg(long)]
    fixed_costs: f64,
    #[arg(long, default_value_t = 0)]
    units: u32,
}

#[derive(Debug, Args)]
struct RoiArgs {
    #[arg(long)]
    outages: f64,
    #[arg(long)]
    hours: f64,
    #[arg(long)]
    rate: f64,
    #[arg(long, default_value_t = 0.0)]
    cafe: f64,
    /// 보조배터리 교체 주기 [개월], 0이면 미사용
    #[arg(long, default_value_t = 0.0)]
    lifespan: f64,
}

#[derive(Debug, Args)]
struct DiyArgs {
    #[arg(long, default_value_t = 3)]
    quality: u8,
    #[arg(long, default_value_t = 3)]
    skill: u8,
    #[arg(long, default_value_t = 25.0)]
    time_value: f64,
}

#[derive(Debug, Args)]
struct RecommendArgs {
    /// 기기 id (반복 가능): laptop, tablet, smartphone, monitor, wifi-router, ...
    #[arg(long = "device", value_parser = parse_id::<DeviceId>)]
    devices: Vec<DeviceId>,
    #[arg(long, value_parser = parse_id::<LocationId>)]
    location: LocationId,
    #[arg(long, value_parser = parse_id::<DurationId>)]
    duration: DurationId,
}

fn parse_id<T>(s: &str) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    s.parse::<T>().map_err(|e| e.to_string())
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령 또는 대화형 메뉴를 실행한다.
fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("설정을 읽지 못해 기본값을 사용합니다: {e}");
            Config::default()
        }
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let mut tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    if let Err(err) = try_run(cli, &mut cfg, &mut tr) {
        eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(cli: Cli, cfg: &mut Config, tr: &mut Translator) -> Result<(), AppError> {
    let catalog = Catalog::default();
    let Some(command) = cli.command else {
        return app::run(cfg, tr);
    };
    let (tr, cfg) = (&*tr, &*cfg);
    match command {
        Command::BreakEven(a) => {
            let res = finance::compute_break_even(&BreakEvenInput {
                selling_price: a.price,
                variable_cost: a.variable_cost,
                fixed_costs: a.fixed_costs,
                units_sold: a.units,
            })?;
            emit(cli.json, &res, || report::break_even_rows(tr, cfg, &res))
        }
        Command::Roi(a) => {
            let input = RoiInput {
                outages_per_month: a.outages,
                hours_per_outage: a.hours,
                hourly_rate: a.rate,
                cafe_purchases_per_month: a.cafe,
                power_bank_lifespan_months: a.lifespan,
            };
            let res = finance::compute_roi(&input, &cfg.pricing)?;
            emit(cli.json, &res, || report::roi_rows(tr, cfg, &res))
        }
        Command::Diy(a) => {
            let input = DiyInput {
                quality_level: a.quality,
                skill_level: a.skill,
                time_value_per_hour: a.time_value,
            };
            let res = diy::compute_diy_cost(&input, &catalog.diy_features, &cfg.pricing)?;
            emit(cli.json, &res, || report::diy_rows(tr, cfg, &res))
        }
        Command::Recommend(a) => {
            let input = UseCaseInput {
                devices: a.devices.into_iter().collect(),
                location: a.location,
                duration: a.duration,
            };
            let rec = recommend::recommend(&input, &catalog)?;
            emit(cli.json, &rec, || report::recommendation_rows(tr, cfg, &rec))
        }
        Command::Catalog => {
            if cli.json {
                println!("{}", report::to_json(&catalog)?);
            } else {
                for line in report::catalog_lines(tr, cfg, &catalog) {
                    println!("{line}");
                }
            }
            Ok(())
        }
    }
}

fn emit<T, F>(json: bool, value: &T, rows: F) -> Result<(), AppError>
where
    T: Serialize,
    F: FnOnce() -> Vec<report::Row>,
{
    if json {
        println!("{}", report::to_json(value)?);
    } else {
        report::print_rows(&rows());
    }
    Ok(())
}
