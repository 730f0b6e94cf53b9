#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::Path;

use hwcatalog::config::{CatalogPaths, Category};

pub const CHASSIS_CSV: &str = "\
Column_0,Column_1,Column_2,Column_5,Column_6,Column_7,Column_15
1,Supermicro,ASG-1115S-NE316R,1U,16,NVMe,
2,Supermicro,ASG-1115S-NE3X12R,1U,8,NVMe,short depth
1,Dell,R7615,2U,24,NVMe,
,,,,,,
,Lenovo,,1U,10,SAS,missing model
";

pub const STORAGE_CSV: &str = "\
Vendor,Model,Mfg Part #,Capacity,Seq Read 128K (MB/s),Power Active / Idle (W),Preferred
Supermicro,CD8P 30.72,KCD8XPUG30T7,30.72TB,7200,25/5,1
Supermicro,CD8P 15.36,KCD8XPUG15T3,15.36TB,7200,24/5,1
Dell,PM1743 3.84,MZWLO3T8HCLS,3840GB,14000,n/a,2
Dell,PM9A3 0.96,MZQL2960HCJR,960GB,6500,8/3,
,Orphan,X,1TB,1000,1/1,1
";

pub const CPU_CSV: &str = "\
Vendor,Model,Cores,Threads,TDP,Preferred
AMD,EPYC 9354P,32,64,280,1
AMD,EPYC 9554P,64,128,360,1
Intel,Xeon 6740E,92,92,250,
Intel,,16,32,150,1
";

pub const MEMORY_CSV: &str = "\
Vendor,Model,Size,Speed,Preferred
Samsung,M321R8GA0PB0,64GB,4800,1
Samsung,M321R4GA3PB0,32GB,4800,1
Micron,MTC40F2046S1,unknown,5600,
";

pub const BOOT_CSV: &str = "\
Vendor,Model,Capacity
Micron,7450 PRO M.2,480GB
";

pub fn write_tables(root: &Path) -> CatalogPaths {
    let paths = CatalogPaths::under(root);
    fs::create_dir_all(&paths.data_dir).expect("data dir should be created");
    for (category, body) in [
        (Category::Chassis, CHASSIS_CSV),
        (Category::StorageDrives, STORAGE_CSV),
        (Category::Cpus, CPU_CSV),
        (Category::Memory, MEMORY_CSV),
        (Category::BootDrives, BOOT_CSV),
    ] {
        fs::write(paths.table(category), body).expect("fixture table should be written");
    }
    paths
}

/// Rows of one worksheet; numeric strings become number cells, "" leaves the cell out.
pub type Grid<'a> = &'a [&'a [&'a str]];

const SHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

fn column_name(mut idx: usize) -> String {
    let mut name = String::new();
    loop {
        name.insert(0, (b'A' + (idx % 26) as u8) as char);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }
    name
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn sheet_xml(grid: Grid) -> String {
    let mut xml = format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?><worksheet xmlns=\"{SHEET_NS}\"><sheetData>");
    for (r, row) in grid.iter().enumerate() {
        xml.push_str(&format!("<row r=\"{}\">", r + 1));
        for (c, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let reference = format!("{}{}", column_name(c), r + 1);
            if value.parse::<f64>().is_ok() {
                xml.push_str(&format!("<c r=\"{reference}\"><v>{value}</v></c>"));
            } else {
                xml.push_str(&format!(
                    "<c r=\"{reference}\" t=\"inlineStr\"><is><t>{}</t></is></c>",
                    escape(value)
                ));
            }
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

/// Minimal .xlsx package. A sheet given as `None` is listed in the workbook
/// but its part is left out of the archive, so reading it fails.
pub fn xlsx_bytes(sheets: &[(&str, Option<Grid>)]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(std::io::Cursor::new(&mut buf));
        let mut add = |name: &str, body: &str| {
            zip.start_file(name, zip::write::SimpleFileOptions::default())
                .unwrap();
            zip.write_all(body.as_bytes()).unwrap();
        };

        let overrides: String = (1..=sheets.len())
            .map(|i| format!("<Override PartName=\"/xl/worksheets/sheet{i}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>"))
            .collect();
        add(
            "[Content_Types].xml",
            &format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?><Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\"><Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/><Default Extension=\"xml\" ContentType=\"application/xml\"/><Override PartName=\"/xl/workbook.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml\"/>{overrides}</Types>"),
        );
        add(
            "_rels/.rels",
            &format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?><Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\"><Relationship Id=\"rId1\" Type=\"{REL_NS}/officeDocument\" Target=\"xl/workbook.xml\"/></Relationships>"),
        );

        let entries: String = sheets
            .iter()
            .enumerate()
            .map(|(i, (name, _))| {
                format!("<sheet name=\"{}\" sheetId=\"{}\" r:id=\"rId{}\"/>", escape(name), i + 1, i + 1)
            })
            .collect();
        add(
            "xl/workbook.xml",
            &format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?><workbook xmlns=\"{SHEET_NS}\" xmlns:r=\"{REL_NS}\"><sheets>{entries}</sheets></workbook>"),
        );

        let rels: String = (1..=sheets.len())
            .map(|i| format!("<Relationship Id=\"rId{i}\" Type=\"{REL_NS}/worksheet\" Target=\"worksheets/sheet{i}.xml\"/>"))
            .collect();
        add(
            "xl/_rels/workbook.xml.rels",
            &format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?><Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">{rels}</Relationships>"),
        );

        for (i, (_, grid)) in sheets.iter().enumerate() {
            if let Some(grid) = grid {
                add(&format!("xl/worksheets/sheet{}.xml", i + 1), &sheet_xml(grid));
            }
        }
        zip.finish().unwrap();
    }
    buf
}

pub fn write_workbook(root: &Path, sheets: &[(&str, Option<Grid>)]) -> CatalogPaths {
    let paths = CatalogPaths::under(root);
    fs::write(&paths.workbook, xlsx_bytes(sheets)).expect("fixture workbook should be written");
    paths
}
