use std::process::{Command, Output};
use tempfile::TempDir;

fn prt(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_prt"))
        .args(args)
        .output()
        .expect("failed to run prt")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_pages_command() {
    let output = prt(&["pages", "--characters", "20000", "--trim", "14x21"]);
    assert!(output.status.success(), "{:?}", output);
    assert!(stdout(&output).contains("Estimated pages: 24 (3 signatures of 8)"));
}

#[test]
fn test_pages_rejects_negative_unless_lenient() {
    let strict = prt(&["pages", "--characters", "-5"]);
    assert!(!strict.status.success());
    assert!(String::from_utf8_lossy(&strict.stderr).contains("must not be negative"));

    let lenient = prt(&["pages", "--characters", "20.000", "--trim", "14x21", "--lenient"]);
    assert!(lenient.status.success(), "{:?}", lenient);
    assert!(stdout(&lenient).contains("Estimated pages: 24"));
}

#[test]
fn test_cost_command() {
    let output = prt(&[
        "cost",
        "--pages",
        "200",
        "--print-run",
        "1000",
        "--cost-per-page",
        "0.15",
        "--cover-price",
        "49,90",
    ]);
    assert!(output.status.success(), "{:?}", output);
    let text = stdout(&output);
    assert!(text.contains("Publisher profit: BRL 14910.00"));
    assert!(text.contains("Profit per copy: BRL 14.91"));
}

#[test]
fn test_cost_rejects_zero_print_run() {
    let output = prt(&[
        "cost",
        "--pages",
        "200",
        "--print-run",
        "0",
        "--cost-per-page",
        "0.15",
        "--cover-price",
        "49.90",
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Print run must be greater than zero"));
}

#[test]
fn test_init_config_then_use_it() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("options.json");
    let config = config.to_str().unwrap();

    let init = prt(&["init-config", "--output", config]);
    assert!(init.status.success(), "{:?}", init);

    let pages = prt(&["pages", "--chapters", "1", "--config", config]);
    assert!(pages.status.success(), "{:?}", pages);
    assert!(stdout(&pages).contains("Estimated pages: 8"));
}

#[test]
fn test_sales_command() {
    let dir = TempDir::new().unwrap();
    let sellers = dir.path().join("sellers.csv");
    let sales = dir.path().join("sales.csv");
    std::fs::write(&sellers, "id,name,personal_goal\na,Ana,1000\nb,Bia,0\n").unwrap();
    std::fs::write(
        &sales,
        "seller_id,amount,date\na,1200,2024-05-03\nb,300,2024-05-04\na,50,2024-04-30\n",
    )
    .unwrap();

    let output = prt(&[
        "sales",
        "--sellers",
        sellers.to_str().unwrap(),
        "--sales",
        sales.to_str().unwrap(),
        "--month",
        "2024-05",
    ]);
    assert!(output.status.success(), "{:?}", output);
    let text = stdout(&output);
    assert!(text.contains("Total sold: BRL 1500.00"));
    assert!(text.contains("(120.0%)  GOAL  TOP"));
}

#[test]
fn test_comments_post_and_list() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("comments.csv");
    std::fs::write(
        &path,
        "id,chapter_id,user_id,comment,created_at\n\
         c1,ch-1,editor-1,Second pass done,2024-05-01T10:00:00Z\n\
         c2,ch-2,editor-1,Other chapter,2024-05-01T09:00:00Z\n",
    )
    .unwrap();
    let file = path.to_str().unwrap();

    let blank = prt(&["comments", "-i", file, "--chapter", "ch-1", "--post", "  ", "--user", "u"]);
    assert!(!blank.status.success());

    let posted = prt(&[
        "comments", "-i", file, "--chapter", "ch-1", "--post", "Approved by me", "--user",
        "editor-2",
    ]);
    assert!(posted.status.success(), "{:?}", posted);
    let text = stdout(&posted);
    assert!(text.contains("Comments on ch-1 (2)"));
    let first = text.find("Second pass done").unwrap();
    let second = text.find("editor-2: Approved by me").unwrap();
    assert!(first < second);

    // The other chapter's comment survives the rewrite
    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains("Other chapter"));
}
