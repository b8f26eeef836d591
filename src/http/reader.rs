//! # Lectura de Requests desde el socket
//! src/http/reader.rs
//!
//! Separa la forma de obtener los bytes de un request del parser. La
//! estrategia actual hace un único `read` sobre un buffer fijo: si el
//! request no cabe o llega en varios segmentos TCP, se trunca. Otra
//! estrategia (leer hasta `\r\n\r\n`, length-delimited) solo necesita
//! implementar [`RequestReader`].

use std::io::{self, Read};

/// Estrategia para leer los bytes crudos de un request
pub trait RequestReader: Send + Sync {
    fn read_request(&self, stream: &mut dyn Read) -> io::Result<Vec<u8>>;
}

/// Un solo `read` sobre un buffer de `buffer_size` bytes, sin reintentos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleRead {
    buffer_size: usize,
}

impl SingleRead {
    pub fn new(buffer_size: usize) -> Self {
        Self { buffer_size }
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }
}

impl RequestReader for SingleRead {
    fn read_request(&self, stream: &mut dyn Read) -> io::Result<Vec<u8>> {
        let mut buffer = vec![0u8; self.buffer_size];
        let bytes_read = stream.read(&mut buffer)?;
        buffer.truncate(bytes_read);
        Ok(buffer)
    }
}
