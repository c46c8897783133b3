// ==========================================
// 견적 콘솔 - 文件解码器
// ==========================================
// 文件解码协作方: 电子表格 → { headers, rows }
// 映射器/校验器只消费这个形状，不感知文件格式
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

/// 解码后的表格数据
///
/// rows 与 headers 按位置对齐；单元格一律是修剪过的字符串。
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SheetData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// 文件解码接口
pub trait FileDecoder {
    fn decode(&self, file_path: &Path) -> ImportResult<SheetData>;
}

// ==========================================
// CSV 解码器
// ==========================================
pub struct CsvDecoder;

impl FileDecoder for CsvDecoder {
    fn decode(&self, file_path: &Path) -> ImportResult<SheetData> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row: Vec<String> = record.iter().map(|cell| cell.trim().to_string()).collect();

            // 跳过完全空白的行
            if row.iter().all(|cell| cell.is_empty()) {
                continue;
            }
            rows.push(row);
        }

        Ok(SheetData { headers, rows })
    }
}

// ==========================================
// Excel 解码器
// ==========================================
pub struct ExcelDecoder;

impl FileDecoder for ExcelDecoder {
    fn decode(&self, file_path: &Path) -> ImportResult<SheetData> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let mut workbook: Xlsx<_> = open_workbook(file_path)
            .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;

        // 读取第一个 sheet
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::ExcelParseError(
                "Excel 文件无工作表".to_string(),
            ));
        }
        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        // 第一行为表头
        let mut range_rows = range.rows();
        let header_row = range_rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无数据行".to_string()))?;
        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for data_row in range_rows {
            let row: Vec<String> = data_row
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect();

            if row.iter().all(|cell| cell.is_empty()) {
                continue;
            }
            rows.push(row);
        }

        Ok(SheetData { headers, rows })
    }
}

// ==========================================
// 通用解码器（按扩展名分派）
// ==========================================
pub struct UniversalDecoder;

impl FileDecoder for UniversalDecoder {
    fn decode(&self, file_path: &Path) -> ImportResult<SheetData> {
        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvDecoder.decode(file_path),
            "xlsx" | "xls" => ExcelDecoder.decode(file_path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
