use std::path::PathBuf;

use svcforge_core::GeneratedFile;

use crate::{GoFile, Import};

/// `pkg/logger/logger.go`: structured logger backed by logrus.
///
/// Independent of the configuration.
pub struct LoggerGo;

impl GeneratedFile for LoggerGo {
    fn path(&self) -> PathBuf {
        PathBuf::from("pkg/logger/logger.go")
    }

    fn render(&self) -> String {
        GoFile::new("logger")
            .import(Import::new("fmt"))
            .import(Import::new("io"))
            .import(Import::new("os"))
            .import(Import::new("github.com/sirupsen/logrus"))
            .section(LOGGER)
            .render()
    }
}

const LOGGER: &str = r#"// Logger is the structured logger used across the service.
//
// Every level takes a message followed by alternating keys and values.
type Logger interface {
	Debug(msg string, keysAndValues ...interface{})
	Info(msg string, keysAndValues ...interface{})
	Warn(msg string, keysAndValues ...interface{})
	Error(msg string, keysAndValues ...interface{})
	Fatal(msg string, keysAndValues ...interface{})
	WithField(key string, value interface{}) Logger
	WithFields(fields map[string]interface{}) Logger
}

// LoggerConfig selects level, format and destination.
type LoggerConfig struct {
	Level  string
	Format string
	Output string
}

// LogrusLogger implements Logger on top of logrus.
type LogrusLogger struct {
	entry *logrus.Entry
}

// New builds a logger; unknown levels fall back to info.
func New(cfg LoggerConfig) Logger {
	log := logrus.New()

	level, err := logrus.ParseLevel(cfg.Level)
	if err != nil {
		level = logrus.InfoLevel
	}
	log.SetLevel(level)

	if cfg.Format == "json" {
		log.SetFormatter(&logrus.JSONFormatter{})
	} else {
		log.SetFormatter(&logrus.TextFormatter{FullTimestamp: true})
	}

	log.SetOutput(output(cfg.Output))

	return &LogrusLogger{entry: logrus.NewEntry(log)}
}

func output(name string) io.Writer {
	if name == "stderr" {
		return os.Stderr
	}
	return os.Stdout
}

func (l *LogrusLogger) Debug(msg string, keysAndValues ...interface{}) {
	l.entry.WithFields(parseFields(keysAndValues)).Debug(msg)
}

func (l *LogrusLogger) Info(msg string, keysAndValues ...interface{}) {
	l.entry.WithFields(parseFields(keysAndValues)).Info(msg)
}

func (l *LogrusLogger) Warn(msg string, keysAndValues ...interface{}) {
	l.entry.WithFields(parseFields(keysAndValues)).Warn(msg)
}

func (l *LogrusLogger) Error(msg string, keysAndValues ...interface{}) {
	l.entry.WithFields(parseFields(keysAndValues)).Error(msg)
}

func (l *LogrusLogger) Fatal(msg string, keysAndValues ...interface{}) {
	l.entry.WithFields(parseFields(keysAndValues)).Fatal(msg)
}

func (l *LogrusLogger) WithField(key string, value interface{}) Logger {
	return &LogrusLogger{entry: l.entry.WithField(key, value)}
}

func (l *LogrusLogger) WithFields(fields map[string]interface{}) Logger {
	return &LogrusLogger{entry: l.entry.WithFields(logrus.Fields(fields))}
}

// parseFields pairs up keys and values; a trailing key without a value is dropped.
func parseFields(keysAndValues []interface{}) logrus.Fields {
	fields := logrus.Fields{}
	for i := 0; i+1 < len(keysAndValues); i += 2 {
		key, ok := keysAndValues[i].(string)
		if !ok {
			key = fmt.Sprint(keysAndValues[i])
		}
		fields[key] = keysAndValues[i+1]
	}
	return fields
}"#;
