//! End-to-end tests: CSV on disk → records → filters → summary → presentation.

use quitados_dashboard::charts::ChartData;
use quitados_dashboard::data::{self, format_brl, LoaderError};
use quitados_dashboard::gui::metrics;
use quitados_dashboard::stats::{Aggregator, FilterColumn, FilterOptions, FilterSelection};
use rust_decimal::Decimal;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tempfile::TempDir;

const BANNER: &str = "RELATORIO DE QUITADOS - JANEIRO 2024,,,,,,,,";
const HEADER: &str = "Diretor,Escritório,UF,Consultor,Banco,Desconto,Saldo Devedor,CTT,Responsavel";

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn write_report(dir: &TempDir, lines: &[&str]) -> PathBuf {
    let path = dir.path().join("quitados.csv");
    fs::write(&path, lines.join("\n") + "\n").unwrap();
    path
}

fn sample_report(dir: &TempDir) -> PathBuf {
    write_report(
        dir,
        &[
            BANNER,
            HEADER,
            r#" ana ,Centro,SP,Carlos, itaú ,"R$ 1.234,56","R$ 2.000,00",1001,MARIA"#,
            r#"BRUNO,Sul,RS,Paula,bradesco,"R$ 100,00","R$ 150,00",1002,JOSE"#,
            r#"ana,Norte,SP,Carlos,Itaú,"R$ 50,00","R$ 80,00",,MARIA"#,
        ],
    )
}

#[test]
fn test_load_and_normalize_report() {
    let dir = tempfile::tempdir().unwrap();
    let records = data::load_records(&sample_report(&dir)).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].diretor, "ANA");
    assert_eq!(records[0].banco, "ITAÚ");
    assert_eq!(records[0].desconto, Some(dec("1234.56")));
    assert_eq!(records[0].saldo_devedor, Some(dec("2000")));
    assert_eq!(records[0].economia, Some(dec("765.44")));
    assert_eq!(records[2].ctt, None);

    for r in &records {
        let expected = r.saldo_devedor.unwrap() - r.desconto.unwrap();
        assert_eq!(r.economia, Some(expected.round_dp(2)));
    }
}

#[test]
fn test_filter_options_from_report() {
    let dir = tempfile::tempdir().unwrap();
    let records = data::load_records(&sample_report(&dir)).unwrap();
    let options = FilterOptions::from_records(&records);

    assert_eq!(options.options(FilterColumn::Diretor), ["TODOS", "ANA", "BRUNO"]);
    assert_eq!(options.options(FilterColumn::Escritorio), ["TODOS", "Centro", "Sul", "Norte"]);
    assert_eq!(options.options(FilterColumn::Uf), ["TODOS", "SP", "RS"]);
    assert_eq!(options.options(FilterColumn::Banco), ["TODOS", "BRADESCO", "ITAÚ"]);
}

#[test]
fn test_unfiltered_summary() {
    let dir = tempfile::tempdir().unwrap();
    let records = data::load_records(&sample_report(&dir)).unwrap();
    let summary = Aggregator::compute(&records, &FilterSelection::new());

    assert_eq!(summary.row_count, records.len());
    assert_eq!(summary.total_contratos, 2);
    assert_eq!(summary.total_descontos, dec("1384.56"));
    assert_eq!(summary.total_saldo_devedor, dec("2230"));
    assert_eq!(summary.total_economia, dec("845.44"));
    assert_eq!(
        summary.total_saldo_devedor - summary.total_descontos,
        summary.total_economia
    );
    assert_eq!(summary.ctt_by_banco.values().sum::<usize>(), summary.total_contratos);
    assert_eq!(
        summary.ctt_by_responsavel.values().sum::<usize>(),
        summary.total_contratos
    );
}

#[test]
fn test_director_filter_drives_metrics_and_titles() {
    let dir = tempfile::tempdir().unwrap();
    let records = data::load_records(&sample_report(&dir)).unwrap();
    let selection = FilterSelection::new().with(FilterColumn::Diretor, "ANA");
    let summary = Aggregator::compute(&records, &selection);

    let m = metrics(&summary);
    assert_eq!(m[0].value, "1");
    assert_eq!(m[1].value, "R$ 1.284,56");
    assert_eq!(m[2].value, "R$ 2.080,00");
    assert_eq!(m[3].value, "R$ 795,44");

    let charts = ChartData::for_summary(&summary, selection.get(FilterColumn::Diretor), "Janeiro 2024");
    assert_eq!(charts.len(), 2);
    assert_eq!(
        charts[0].title,
        "Quantidade de CTT por Responsável - Janeiro 2024 (Diretor: ANA)"
    );
    assert_eq!(charts[0].bars, vec![("MARIA".to_string(), 1)]);
    assert_eq!(charts[1].bars, vec![("ITAÚ".to_string(), 1)]);
}

#[test]
fn test_absent_value_yields_no_data() {
    let dir = tempfile::tempdir().unwrap();
    let records = data::load_records(&sample_report(&dir)).unwrap();
    let selection = FilterSelection::new().with(FilterColumn::Uf, "MG");
    let summary = Aggregator::compute(&records, &selection);

    assert!(summary.is_empty());
    assert!(ChartData::for_summary(&summary, "TODOS", "Janeiro 2024").is_empty());
    let m = metrics(&summary);
    assert_eq!(m[0].value, "0");
    assert_eq!(m[3].value, format_brl(Decimal::ZERO));
}

#[test]
fn test_two_row_scenario_from_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_report(
        &dir,
        &[
            BANNER,
            HEADER,
            r#"A,Centro,SP,Carlos,ITAU,"R$ 100,00","R$ 150,00",1,MARIA"#,
            r#"B,Centro,SP,Carlos,ITAU,"R$ 50,00","R$ 80,00",2,MARIA"#,
        ],
    );
    let records = data::load_records(&path).unwrap();
    let summary = Aggregator::compute(&records, &FilterSelection::new().with(FilterColumn::Diretor, "A"));

    assert_eq!(summary.total_descontos, dec("100.00"));
    assert_eq!(summary.total_saldo_devedor, dec("150.00"));
    assert_eq!(summary.total_economia, dec("50.00"));
    assert_eq!(summary.total_contratos, 1);
}

#[test]
fn test_missing_column_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_report(
        &dir,
        &[
            BANNER,
            "Diretor,Escritório,UF,Consultor,Banco,Desconto,Saldo Devedor,CTT",
            r#"A,Centro,SP,Carlos,ITAU,"R$ 100,00","R$ 150,00",1"#,
        ],
    );

    let err = data::load_records(&path).unwrap_err();
    assert!(matches!(err, LoaderError::MissingColumn(ref c) if c == "RESPONSAVEL"));
}

#[test]
fn test_bad_money_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_report(
        &dir,
        &[
            BANNER,
            HEADER,
            r#"A,Centro,SP,Carlos,ITAU,"R$ cem","R$ 150,00",1,MARIA"#,
        ],
    );

    let err = data::load_records(&path).unwrap_err();
    assert!(matches!(err, LoaderError::Parse { ref column, row: 0, .. } if column == "DESCONTO"));
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = data::load_records(&dir.path().join("nada.csv")).unwrap_err();
    assert!(matches!(err, LoaderError::Read { .. }));
}

#[test]
fn test_missing_markers_load_as_missing_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_report(
        &dir,
        &[
            BANNER,
            HEADER,
            r#"NA,Centro,SP,,BRADESCO,"","R$ 150,00",N/A,MARIA"#,
            r#"B,,,Paula,N/A,N/A,"R$ 80,00",7,"#,
            r#"C,Sul,RS,Paula,ITAU,"R$ 10,00",NaN,8,JOSE"#,
        ],
    );
    let records = data::load_records(&path).unwrap();
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].diretor, "NAN");
    assert_eq!(records[0].consultor, None);
    assert_eq!(records[0].desconto, None);
    assert_eq!(records[0].saldo_devedor, Some(dec("150")));
    assert_eq!(records[0].economia, None);
    assert_eq!(records[0].ctt, None);

    assert_eq!(records[1].banco, "NAN");
    assert_eq!(records[1].escritorio, None);
    assert_eq!(records[1].uf, None);
    assert_eq!(records[1].desconto, None);
    assert_eq!(records[1].responsavel, None);

    assert_eq!(records[2].saldo_devedor, None);
    assert_eq!(records[2].desconto, Some(dec("10")));
}

#[test]
fn test_missing_values_count_as_zero_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_report(
        &dir,
        &[
            BANNER,
            HEADER,
            r#"NA,Centro,SP,,BRADESCO,"","R$ 150,00",N/A,MARIA"#,
            r#"B,,,Paula,N/A,N/A,"R$ 80,00",7,"#,
            r#"C,Sul,RS,Paula,ITAU,"R$ 10,00",NaN,8,JOSE"#,
        ],
    );
    let records = data::load_records(&path).unwrap();
    let summary = Aggregator::compute(&records, &FilterSelection::new());

    assert_eq!(summary.total_contratos, 2);
    assert_eq!(summary.total_descontos, dec("10"));
    assert_eq!(summary.total_saldo_devedor, dec("230"));
    assert_eq!(summary.total_economia, Decimal::ZERO);

    let bancos: Vec<(&str, usize)> = summary
        .ctt_by_banco
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();
    assert_eq!(bancos, vec![("BRADESCO", 0), ("ITAU", 1), ("NAN", 1)]);
    let responsaveis: Vec<(&str, usize)> = summary
        .ctt_by_responsavel
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();
    assert_eq!(responsaveis, vec![("JOSE", 1), ("MARIA", 0)]);

    let options = FilterOptions::from_records(&records);
    assert_eq!(options.options(FilterColumn::Diretor), ["TODOS", "B", "C", "NAN"]);
    assert_eq!(options.options(FilterColumn::Escritorio), ["TODOS", "Centro", "Sul"]);
    assert_eq!(options.options(FilterColumn::Consultor), ["TODOS", "Paula"]);

    let by_nan = FilterSelection::new().with(FilterColumn::Diretor, "NAN");
    assert_eq!(Aggregator::compute(&records, &by_nan).row_count, 1);
}
